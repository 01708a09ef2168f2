/// A resolved static or instance field reference.
///
/// Rendered in Dalvik descriptor syntax, e.g.
/// `Ljava/lang/System;->out:Ljava/io/PrintStream;`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldRef {
    /// Descriptor of the declaring class.
    pub class: String,
    /// Field name.
    pub name: String,
    /// Descriptor of the field's declared type.
    pub descriptor: String,
}

impl FieldRef {
    pub fn new(
        class: impl Into<String>,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> Self {
        FieldRef {
            class: class.into(),
            name: name.into(),
            descriptor: descriptor.into(),
        }
    }
}

impl std::fmt::Display for FieldRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}:{}", self.class, self.name, self.descriptor)
    }
}
