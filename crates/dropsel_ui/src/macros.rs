//! Macros for reducing boilerplate in widget implementations.

/// Generates a builder-style setter method for a field.
///
/// # Usage
///
/// ```ignore
/// // When method name matches field name:
/// builder_field!(width, f32);
/// // Generates: pub fn width(mut self, value: f32) -> Self { self.width = value; self }
///
/// // When the field lives in a nested struct:
/// builder_field!(width, config.width, f32);
/// ```
#[macro_export]
macro_rules! builder_field {
    ($method:ident, $($field:ident).+, $type:ty) => {
        pub fn $method(mut self, value: $type) -> Self {
            self.$($field).+ = value;
            self
        }
    };
    ($name:ident, $type:ty) => {
        pub fn $name(mut self, value: $type) -> Self {
            self.$name = value;
            self
        }
    };
}

/// Generates a builder-style setter method for an Option field.
///
/// # Usage
///
/// ```ignore
/// builder_option!(placeholder, config.placeholder, String);
/// // Generates: pub fn placeholder(mut self, value: impl Into<String>) -> Self { ... = Some(value.into()); self }
/// ```
#[macro_export]
macro_rules! builder_option {
    ($method:ident, $($field:ident).+, $type:ty) => {
        pub fn $method(mut self, value: impl Into<$type>) -> Self {
            self.$($field).+ = Some(value.into());
            self
        }
    };
    ($name:ident, $type:ty) => {
        pub fn $name(mut self, value: impl Into<$type>) -> Self {
            self.$name = Some(value.into());
            self
        }
    };
}

/// Generates a callback setter method for widgets storing a [`Callback`](crate::Callback).
///
/// # Usage
///
/// ```ignore
/// callback_setter!(on_change, String);
/// // Generates: pub fn on_change<F>(mut self, f: F) -> Self where F: Fn(String) -> Message + 'static
/// ```
#[macro_export]
macro_rules! callback_setter {
    ($name:ident, $param:ty) => {
        pub fn $name<F>(mut self, f: F) -> Self
        where
            F: Fn($param) -> Message + 'static,
        {
            self.$name = $crate::Callback::new(f);
            self
        }
    };
}
