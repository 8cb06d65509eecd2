use crate::content::tags;
use crate::convert::ConvertError;
use crate::message::MessageFlags;
use smol_str::SmolStr;
use std::collections::BTreeMap;

/// The set of script-registered custom content types.
///
/// An explicit value, built once at initialization and handed to whatever
/// parses messages. There is no process-wide registration state and no
/// hidden ordering requirement between registration and traffic beyond
/// constructing this first.
#[derive(Debug, Clone, Default)]
pub struct ContentRegistry {
    types: BTreeMap<SmolStr, MessageFlags>,
}

impl ContentRegistry {
    /// An empty registry: only SDK-defined content types resolve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom content type with the default delivery flags
    /// (counted and stored).
    ///
    /// Re-registering a tag is allowed and overwrites the previous entry.
    pub fn register(&mut self, content_type: impl Into<SmolStr>) -> Result<(), ConvertError> {
        self.register_with_flags(
            content_type,
            MessageFlags::IS_COUNTABLE | MessageFlags::IS_SAVE,
        )
    }

    /// Register a custom content type with explicit delivery flags.
    ///
    /// Empty tags and tags inside the SDK's reserved namespace are
    /// rejected.
    pub fn register_with_flags(
        &mut self,
        content_type: impl Into<SmolStr>,
        flags: MessageFlags,
    ) -> Result<(), ConvertError> {
        let content_type = content_type.into();
        if content_type.is_empty() || content_type.starts_with(tags::RESERVED_PREFIX) {
            return Err(ConvertError::ReservedContentType(content_type));
        }
        self.types.insert(content_type, flags);
        Ok(())
    }

    /// Whether a tag has been registered.
    pub fn is_registered(&self, content_type: &str) -> bool {
        self.types.contains_key(content_type)
    }

    /// The delivery flags a tag was registered with.
    pub fn flags_of(&self, content_type: &str) -> Option<MessageFlags> {
        self.types.get(content_type).copied()
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// True when nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_resolve() {
        let mut registry = ContentRegistry::new();
        registry.register("custom.poll").unwrap();
        assert!(registry.is_registered("custom.poll"));
        assert!(!registry.is_registered("custom.quiz"));
        assert_eq!(
            registry.flags_of("custom.poll"),
            Some(MessageFlags::IS_COUNTABLE | MessageFlags::IS_SAVE)
        );
    }

    #[test]
    fn reserved_namespace_is_rejected() {
        let mut registry = ContentRegistry::new();
        let err = registry.register("im:sneaky").unwrap_err();
        assert!(matches!(err, ConvertError::ReservedContentType(_)));
        let err = registry.register("").unwrap_err();
        assert!(matches!(err, ConvertError::ReservedContentType(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn re_registration_overwrites() {
        let mut registry = ContentRegistry::new();
        registry.register("custom.poll").unwrap();
        registry
            .register_with_flags("custom.poll", MessageFlags::IS_CMD)
            .unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.flags_of("custom.poll"), Some(MessageFlags::IS_CMD));
    }
}
