//! Conversion of any `T: Serialize` into a [`DebugValue`].
//!
//! Structs and maps become [`DebugValue::Map`] with fields in declaration
//! order, sequences and tuples become [`DebugValue::Sequence`], `None` and
//! unit become [`DebugValue::Null`]. Enum variants carrying data become a
//! single-entry map keyed by the variant name.

use crate::error::{Error, Result};
use crate::{DebugMap, DebugValue};
use serde::ser::{self, Serialize};

/// Serializer whose output is a [`DebugValue`].
pub struct DebugValueSerializer;

pub struct SerializeVec {
    vec: Vec<DebugValue>,
}

pub struct SerializeMap {
    map: DebugMap,
    current_key: Option<String>,
}

pub struct SerializeVariant {
    variant: &'static str,
    inner: DebugValue,
}

impl ser::Serializer for DebugValueSerializer {
    type Ok = DebugValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeVariant;

    fn serialize_bool(self, v: bool) -> Result<DebugValue> {
        Ok(DebugValue::from(v))
    }

    fn serialize_i8(self, v: i8) -> Result<DebugValue> {
        Ok(DebugValue::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<DebugValue> {
        Ok(DebugValue::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<DebugValue> {
        Ok(DebugValue::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<DebugValue> {
        Ok(DebugValue::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<DebugValue> {
        Ok(DebugValue::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<DebugValue> {
        Ok(DebugValue::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<DebugValue> {
        Ok(DebugValue::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<DebugValue> {
        Ok(DebugValue::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<DebugValue> {
        Ok(DebugValue::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<DebugValue> {
        Ok(DebugValue::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<DebugValue> {
        Ok(DebugValue::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<DebugValue> {
        Ok(DebugValue::from(v))
    }

    fn serialize_char(self, v: char) -> Result<DebugValue> {
        Ok(DebugValue::from(v))
    }

    fn serialize_str(self, v: &str) -> Result<DebugValue> {
        Ok(DebugValue::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<DebugValue> {
        Ok(DebugValue::from(v))
    }

    fn serialize_none(self) -> Result<DebugValue> {
        Ok(DebugValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<DebugValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<DebugValue> {
        Ok(DebugValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<DebugValue> {
        Ok(DebugValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<DebugValue> {
        Ok(DebugValue::from(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<DebugValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<DebugValue>
    where
        T: ?Sized + Serialize,
    {
        Ok(single_entry(variant, to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or_default()))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVariant> {
        Ok(SerializeVariant {
            variant,
            inner: DebugValue::Sequence(Vec::with_capacity(len)),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or_default()))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVariant> {
        Ok(SerializeVariant {
            variant,
            inner: DebugValue::Map(DebugMap::with_capacity(len)),
        })
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn new(capacity: usize) -> Self {
        SerializeMap {
            map: DebugMap::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = DebugValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<DebugValue> {
        Ok(DebugValue::Sequence(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = DebugValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<DebugValue> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = DebugValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<DebugValue> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = DebugValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        // Non-string keys use their text representation.
        let key = match to_value(key)? {
            DebugValue::String(s) => s,
            DebugValue::Sequence(_) | DebugValue::Map(_) => {
                return Err(Error::unsupported_type("composite map keys"))
            }
            other => other.to_string(),
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<DebugValue> {
        Ok(DebugValue::Map(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = DebugValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<DebugValue> {
        Ok(DebugValue::Map(self.map))
    }
}

impl ser::SerializeTupleVariant for SerializeVariant {
    type Ok = DebugValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if let DebugValue::Sequence(items) = &mut self.inner {
            items.push(to_value(value)?);
        }
        Ok(())
    }

    fn end(self) -> Result<DebugValue> {
        Ok(single_entry(self.variant, self.inner))
    }
}

impl ser::SerializeStructVariant for SerializeVariant {
    type Ok = DebugValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if let DebugValue::Map(map) = &mut self.inner {
            map.insert(key.to_string(), to_value(value)?);
        }
        Ok(())
    }

    fn end(self) -> Result<DebugValue> {
        Ok(single_entry(self.variant, self.inner))
    }
}

fn single_entry(variant: &str, value: DebugValue) -> DebugValue {
    let mut map = DebugMap::with_capacity(1);
    map.insert(variant.to_string(), value);
    DebugValue::Map(map)
}

/// Convert any `T: Serialize` to a [`DebugValue`].
///
/// # Examples
///
/// ```rust
/// use guardtext::{to_value, DebugValue};
///
/// let value = to_value(&vec![Some(1), None]).unwrap();
/// assert_eq!(value.to_string(), "[1,(null)]");
/// ```
///
/// # Errors
///
/// Returns an error if a map key is itself a sequence or map, or if the
/// value's `Serialize` implementation reports a custom error.
pub fn to_value<T>(value: &T) -> Result<DebugValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(DebugValueSerializer)
}
