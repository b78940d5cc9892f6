//! PDF object types.
//!
//! Write-only object model: the renderer builds these values in memory and
//! the serializer turns them into bytes. There is no parsing side.

use std::collections::HashMap;

/// PDF object representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Null object
    Null,
    /// Boolean value
    Boolean(bool),
    /// Integer value
    Integer(i64),
    /// Real (floating-point) value
    Real(f64),
    /// String (byte array, already encoded for the target encoding)
    String(Vec<u8>),
    /// Name (written with a leading /)
    Name(String),
    /// Array of objects
    Array(Vec<Object>),
    /// Dictionary (key-value pairs)
    Dictionary(HashMap<String, Object>),
    /// Stream (dictionary + raw data)
    Stream {
        /// Stream dictionary; /Length is filled in by the serializer
        dict: HashMap<String, Object>,
        /// Stream body bytes
        data: bytes::Bytes,
    },
    /// Indirect object reference
    Reference(ObjectRef),
}

/// Reference to an indirect object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    /// Object number
    pub id: u32,
    /// Generation number
    pub gen: u16,
}

impl ObjectRef {
    /// Create a new object reference.
    pub fn new(id: u32, gen: u16) -> Self {
        Self { id, gen }
    }
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.id, self.gen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_display() {
        let r = ObjectRef::new(7, 0);
        assert_eq!(format!("{}", r), "7 0 R");
    }

    #[test]
    fn test_reference_equality_and_copy() {
        let a = ObjectRef::new(3, 0);
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, ObjectRef::new(3, 1));
    }

    #[test]
    fn test_stream_variant_carries_dict_and_data() {
        let mut dict = HashMap::new();
        dict.insert("Type".to_string(), Object::Name("XObject".to_string()));
        let stream = Object::Stream {
            dict,
            data: bytes::Bytes::from_static(b"q Q"),
        };
        match stream {
            Object::Stream { dict, data } => {
                assert!(dict.contains_key("Type"));
                assert_eq!(&data[..], b"q Q");
            },
            other => panic!("expected Stream, found {:?}", other),
        }
    }
}
