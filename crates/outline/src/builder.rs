//! Outline construction and the process-wide build cache
//!
//! Building an outline reflects over a bean type once: the method catalog is
//! classified, getter/setter pairs are reconciled into properties, and type
//! display names are derived. Results are cached per `(TypeId, NamingStyle)`
//! for the lifetime of the process; repeated builds return the same shared
//! metadata. Builds carrying a custom pluralizer depend on caller
//! configuration and bypass the cache.

use crate::bean::Bean;
use crate::error::OutlineError;
use crate::naming::{self, NamingStyle, Pluralizer};
use crate::outline::{Outline, OutlineData};
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::any::TypeId;
use std::sync::Arc;

/// Built outlines, shared process-wide. Entry insertion is atomic, so
/// concurrent builders converge on one instance per key.
static OUTLINES: Lazy<DashMap<(TypeId, NamingStyle), Arc<OutlineData>>> =
    Lazy::new(DashMap::new);

/// Configures and builds [`Outline`]s
///
/// ```
/// use outline::{bean, OutlineBuilder};
///
/// struct Empty;
///
/// impl Empty {}
///
/// bean! {
///     impl Empty {}
/// }
///
/// let outline = OutlineBuilder::new().camel_cased().build::<Empty>().unwrap();
/// assert!(outline.properties().is_empty());
/// ```
#[derive(Clone)]
pub struct OutlineBuilder {
    style: NamingStyle,
    pluralizer: Option<Pluralizer>,
}

impl OutlineBuilder {
    /// Create a builder with the camelCase convention.
    pub fn new() -> Self {
        Self {
            style: NamingStyle::CamelCase,
            pluralizer: None,
        }
    }

    /// Derive display names in camelCase.
    pub fn camel_cased(mut self) -> Self {
        self.style = NamingStyle::CamelCase;
        self
    }

    /// Derive display names in snake_case.
    pub fn snake_cased(mut self) -> Self {
        self.style = NamingStyle::SnakeCase;
        self
    }

    /// Replace the default English pluralization rule.
    ///
    /// Outlines built with a custom pluralizer are not cached.
    pub fn pluralizer<F>(mut self, pluralizer: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.pluralizer = Some(Arc::new(pluralizer));
        self
    }

    /// Build (or fetch from the cache) the outline of a bean type.
    ///
    /// The only build-time failure is [`OutlineError::ModelConflict`];
    /// failed builds are never cached.
    pub fn build<T: Bean>(&self) -> Result<Outline<T>, OutlineError> {
        if let Some(custom) = &self.pluralizer {
            let data = OutlineData::build::<T>(self.style, custom.as_ref())?;
            return Ok(Outline::from_data(Arc::new(data)));
        }

        let key = (TypeId::of::<T>(), self.style);
        if let Some(cached) = OUTLINES.get(&key) {
            return Ok(Outline::from_data(cached.clone()));
        }

        let data = Arc::new(OutlineData::build::<T>(self.style, &naming::pluralize)?);
        let shared = OUTLINES.entry(key).or_insert(data).clone();
        Ok(Outline::from_data(shared))
    }
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CachedBean {
        label: String,
        flag: Cell<bool>,
    }

    impl CachedBean {
        fn get_label(&self) -> String {
            self.label.clone()
        }

        fn set_label(&mut self, label: String) {
            self.label = label;
        }

        fn is_flag(&self) -> bool {
            self.flag.get()
        }
    }

    crate::bean! {
        impl CachedBean {
            fn get_label(&self) -> String;
            fn set_label(&mut self, label: String);
            fn is_flag(&self) -> bool;
        }
    }

    #[test]
    fn test_repeated_builds_share_metadata() {
        let first = OutlineBuilder::new().camel_cased().build::<CachedBean>().unwrap();
        let second = OutlineBuilder::new().camel_cased().build::<CachedBean>().unwrap();
        assert!(Arc::ptr_eq(&first.data, &second.data));
        assert_eq!(first, second);
    }

    #[test]
    fn test_conventions_cache_independently() {
        let camel = OutlineBuilder::new().camel_cased().build::<CachedBean>().unwrap();
        let snake = OutlineBuilder::new().snake_cased().build::<CachedBean>().unwrap();
        assert!(!Arc::ptr_eq(&camel.data, &snake.data));

        // Same property set under both conventions, paired by raw fragment.
        assert_eq!(camel.properties().len(), snake.properties().len());
        for (left, right) in camel.properties().iter().zip(snake.properties()) {
            assert_eq!(left.raw_name(), right.raw_name());
        }
    }

    #[test]
    fn test_concurrent_builds_converge() {
        let outlines: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    OutlineBuilder::new()
                        .snake_cased()
                        .build::<CachedBean>()
                        .unwrap()
                })
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        for outline in &outlines[1..] {
            assert!(Arc::ptr_eq(&outlines[0].data, &outline.data));
        }
    }

    #[test]
    fn test_custom_pluralizer_bypasses_cache() {
        let cached = OutlineBuilder::new().camel_cased().build::<CachedBean>().unwrap();
        let custom = OutlineBuilder::new()
            .camel_cased()
            .pluralizer(|name| format!("{}-collection", name))
            .build::<CachedBean>()
            .unwrap();

        assert!(!Arc::ptr_eq(&cached.data, &custom.data));
        assert_eq!(custom.camel_cased_plural_name(), "CachedBean-collection");
        assert_eq!(cached.camel_cased_plural_name(), "CachedBeans");
    }
}
