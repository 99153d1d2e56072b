//! Reflection surface generation
//!
//! The [`bean!`] macro is the crate's stand-in for platform reflection: given the
//! signatures of a type's public methods, it generates the [`Bean`]
//! implementation (method catalog plus dynamic accessor dispatch) and the
//! member-reference proxy type whose stubs identify members without
//! executing anything.
//!
//! [`Bean`]: crate::Bean
//! [`bean!`]: macro@crate::bean

/// Generate the reflection surface for a bean-shaped type.
///
/// List the type's public methods with their exact signatures. Supported
/// shapes are zero-argument methods (with or without a return value, taking
/// `&self` or `&mut self`) and single-argument `&mut self` methods returning
/// nothing; parameter and return types must be one of the nine native
/// property kinds. The name `get_type_name` is reserved for the universal
/// reflective accessor the macro appends to every catalog.
///
/// ```
/// use outline::{bean, OutlineBuilder};
///
/// struct Account {
///     name: String,
/// }
///
/// impl Account {
///     fn get_name(&self) -> String {
///         self.name.clone()
///     }
///
///     fn set_name(&mut self, name: String) {
///         self.name = name;
///     }
/// }
///
/// bean! {
///     impl Account {
///         fn get_name(&self) -> String;
///         fn set_name(&mut self, name: String);
///     }
/// }
///
/// # fn main() -> Result<(), outline::OutlineError> {
/// let outline = OutlineBuilder::new().snake_cased().build::<Account>()?;
/// assert_eq!(outline.property_names(), ["name"]);
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! bean {
    (impl $ty:ident { $($methods:tt)* }) => {
        $crate::bean!(@method $ty, [$($methods)*], [], [], [], [], []);
    };

    // Zero-argument method with a return value (getter-shaped).
    (@method $ty:ident, [fn $name:ident(&self) -> $ret:ty; $($rest:tt)*],
     [$($descriptor:tt)*], [$($zero:tt)*], [$($unary:tt)*], [$($getter:tt)*], [$($setter:tt)*]) => {
        $crate::bean!(@method $ty, [$($rest)*],
            [$($descriptor)* ($name, [], <$ret as $crate::NativeType>::TAG)],
            [$($zero)* ($name, <$ret as $crate::NativeType>::TAG)],
            [$($unary)*],
            [$($getter)* ($name, $ret)],
            [$($setter)*]);
    };

    // Single-argument void method (setter-shaped).
    (@method $ty:ident, [fn $name:ident(&mut self, $arg:ident: $aty:ty); $($rest:tt)*],
     [$($descriptor:tt)*], [$($zero:tt)*], [$($unary:tt)*], [$($getter:tt)*], [$($setter:tt)*]) => {
        $crate::bean!(@method $ty, [$($rest)*],
            [$($descriptor)* ($name, [<$aty as $crate::NativeType>::TAG], $crate::TypeTag::Unit)],
            [$($zero)*],
            [$($unary)* ($name, <$aty as $crate::NativeType>::TAG)],
            [$($getter)*],
            [$($setter)* ($name, $aty)]);
    };

    // Zero-argument void method, catalogued but not property-shaped.
    (@method $ty:ident, [fn $name:ident(&self); $($rest:tt)*],
     [$($descriptor:tt)*], [$($zero:tt)*], [$($unary:tt)*], [$($getter:tt)*], [$($setter:tt)*]) => {
        $crate::bean!(@method $ty, [$($rest)*],
            [$($descriptor)* ($name, [], $crate::TypeTag::Unit)],
            [$($zero)* ($name, $crate::TypeTag::Unit)],
            [$($unary)*],
            [$($getter)*],
            [$($setter)*]);
    };

    (@method $ty:ident, [fn $name:ident(&mut self); $($rest:tt)*],
     [$($descriptor:tt)*], [$($zero:tt)*], [$($unary:tt)*], [$($getter:tt)*], [$($setter:tt)*]) => {
        $crate::bean!(@method $ty, [$($rest)*],
            [$($descriptor)* ($name, [], $crate::TypeTag::Unit)],
            [$($zero)* ($name, $crate::TypeTag::Unit)],
            [$($unary)*],
            [$($getter)*],
            [$($setter)*]);
    };

    // All methods consumed: emit the proxy type and the Bean impl.
    (@method $ty:ident, [],
     [$(($mname:ident, [$($mparam:expr)?], $mret:expr))*],
     [$(($zname:ident, $zret:expr))*],
     [$(($uname:ident, $uparam:expr))*],
     [$(($gname:ident, $gret:ty))*],
     [$(($sname:ident, $sty:ty))*]) => {
        $crate::__paste! {
            #[doc = concat!(
                "Member-reference proxy for [`", stringify!($ty),
                "`]; accessor stubs record the referenced member and never run real logic."
            )]
            pub struct [<$ty Members>] {
                recorder: $crate::CallRecorder,
            }

            impl [<$ty Members>] {
                $(
                    #[doc = concat!("Reference `", stringify!($zname), "` without invoking it.")]
                    pub fn $zname(&self) -> $crate::Member {
                        self.recorder.record($crate::Member::new($crate::MethodDescriptor {
                            name: stringify!($zname),
                            param_types: &[],
                            return_type: $zret,
                        }))
                    }
                )*

                $(
                    #[doc = concat!(
                        "Reference `", stringify!($uname),
                        "` without invoking it; the value argument is discarded."
                    )]
                    pub fn $uname<V>(&self, _value: V) -> $crate::Member {
                        self.recorder.record($crate::Member::new($crate::MethodDescriptor {
                            name: stringify!($uname),
                            param_types: &[$uparam],
                            return_type: $crate::TypeTag::Unit,
                        }))
                    }
                )*

                /// Universal reflective accessor carried by every catalog.
                pub fn get_type_name(&self) -> $crate::Member {
                    self.recorder.record($crate::Member::new($crate::MethodDescriptor {
                        name: "get_type_name",
                        param_types: &[],
                        return_type: $crate::TypeTag::Str,
                    }))
                }
            }

            impl $crate::Bean for $ty {
                type Members = [<$ty Members>];

                const TYPE_NAME: &'static str = stringify!($ty);

                fn methods() -> &'static [$crate::MethodDescriptor] {
                    const METHODS: &[$crate::MethodDescriptor] = &[
                        $(
                            $crate::MethodDescriptor {
                                name: stringify!($mname),
                                param_types: &[$($mparam)?],
                                return_type: $mret,
                            },
                        )*
                        $crate::MethodDescriptor {
                            name: "get_type_name",
                            param_types: &[],
                            return_type: $crate::TypeTag::Str,
                        },
                    ];
                    METHODS
                }

                fn members(recorder: $crate::CallRecorder) -> Self::Members {
                    [<$ty Members>] { recorder }
                }

                fn invoke_getter(
                    &self,
                    method: &str,
                ) -> ::core::result::Result<$crate::Value, $crate::OutlineError> {
                    $(
                        if method == stringify!($gname) {
                            let native: $gret = self.$gname();
                            return Ok($crate::NativeType::into_value(native));
                        }
                    )*
                    if method == "get_type_name" {
                        return Ok($crate::Value::Str(
                            <Self as $crate::Bean>::TYPE_NAME.to_string(),
                        ));
                    }
                    Err($crate::OutlineError::UnknownMember {
                        name: method.to_string(),
                    })
                }

                fn invoke_setter(
                    &mut self,
                    method: &str,
                    value: $crate::Value,
                ) -> ::core::result::Result<(), $crate::OutlineError> {
                    let _ = &value;
                    $(
                        if method == stringify!($sname) {
                            let native = <$sty as $crate::NativeType>::from_value(&value)?;
                            self.$sname(native);
                            return Ok(());
                        }
                    )*
                    Err($crate::OutlineError::UnknownMember {
                        name: method.to_string(),
                    })
                }
            }
        }
    };
}
