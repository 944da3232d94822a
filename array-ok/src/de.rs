//! Shape-driven decoding.
//!
//! `#[serde(untagged)]` tries `T` first and only falls back to `Vec<T>` when that fails, which goes
//! wrong whenever `T` can itself be read from a sequence (a derived struct accepts `[255, 255, 255]`
//! as a `Color`). Instead we ask the format what the next value looks like and branch on that:
//!
//! | wire shape          | result                                  |
//! |---------------------|-----------------------------------------|
//! | array               | `Many`, each element decoded as `T`     |
//! | object              | `One`, the object decoded as `T`        |
//! | scalar              | `One`, the scalar decoded as `T`        |
//! | null or missing     | `None`                                  |
//!
//! This needs a self-describing format, since it relies on `deserialize_any`.

use std::{fmt, marker::PhantomData};

use log::trace;
use serde::{
    de::{
        self, Deserialize, Deserializer, EnumAccess, IntoDeserializer, MapAccess, SeqAccess,
        Unexpected, Visitor,
        value::{
            BorrowedBytesDeserializer, BorrowedStrDeserializer, BytesDeserializer,
            EnumAccessDeserializer, MapAccessDeserializer,
        },
    },
    forward_to_deserialize_any,
};

use crate::{DecodeError, OneOrMany};

// upper bound on how much we trust a sequence's size hint when preallocating
const MAX_PREALLOCATED: usize = 4096;

impl<'de, T> Deserialize<'de> for OneOrMany<T>
where
    T: Deserialize<'de>,
{
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // a missing field reaches us as `visit_none`, a present one as `visit_some`
        deserializer.deserialize_option(OneOrManyVisitor(PhantomData))
    }
}

struct OneOrManyVisitor<T>(PhantomData<T>);

/// Hands an already-classified single value to `T`.
///
/// serde's value deserializers route `deserialize_option` and `deserialize_newtype_struct` to
/// `deserialize_any`, which makes `Option<f64>` or `struct Px(f64)` reject a bare `12.3`. A bare
/// value on the wire is always a present value, so those two are answered here and everything
/// else goes to the wrapped deserializer.
struct Bare<D>(D);

impl<'de, D> Deserializer<'de> for Bare<D>
where
    D: Deserializer<'de>,
{
    type Error = D::Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.0.deserialize_any(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.0.deserialize_enum(name, variants, visitor)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

/// Decode a bare scalar as a single `T`.
fn single<'de, T, D, E>(deserializer: D, found: Unexpected<'_>) -> Result<OneOrMany<T>, E>
where
    T: Deserialize<'de>,
    D: Deserializer<'de, Error = E>,
    E: de::Error,
{
    trace!("decoding {found} as a single value");
    T::deserialize(Bare(deserializer)).map(OneOrMany::One).map_err(|e| {
        E::custom(DecodeError::ShapeMismatch {
            found: found.to_string(),
            reason: e.to_string(),
        })
    })
}

impl<'de, T> Visitor<'de> for OneOrManyVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = OneOrMany<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a single value, an array of values, or null")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED));
        loop {
            let index = values.len();
            match seq.next_element::<T>() {
                Ok(Some(value)) => values.push(value),
                Ok(None) => break,
                Err(e) => {
                    return Err(de::Error::custom(DecodeError::Element {
                        index,
                        reason: e.to_string(),
                    }));
                }
            }
        }
        trace!("decoded an array of {} values", values.len());
        Ok(OneOrMany::Many(values))
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        trace!("decoding an object as a single value");
        T::deserialize(Bare(MapAccessDeserializer::new(map))).map(OneOrMany::One)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        trace!("decoded null as an absent value");
        Ok(OneOrMany::None)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_unit()
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        OneOrMany::<T>::deserialize(deserializer)
    }

    fn visit_enum<A>(self, data: A) -> Result<Self::Value, A::Error>
    where
        A: EnumAccess<'de>,
    {
        T::deserialize(Bare(EnumAccessDeserializer::new(data))).map(OneOrMany::One)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        single(v.into_deserializer(), Unexpected::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        single(v.into_deserializer(), Unexpected::Signed(v))
    }

    fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        single(v.into_deserializer(), Unexpected::Other("128-bit integer"))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        single(v.into_deserializer(), Unexpected::Unsigned(v))
    }

    fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        single(v.into_deserializer(), Unexpected::Other("128-bit integer"))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        single(v.into_deserializer(), Unexpected::Float(v))
    }

    fn visit_char<E>(self, v: char) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        single(v.into_deserializer(), Unexpected::Char(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        single(v.into_deserializer(), Unexpected::Str(v))
    }

    fn visit_borrowed_str<E>(self, v: &'de str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        single(BorrowedStrDeserializer::new(v), Unexpected::Str(v))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let found = format!("string {v:?}");
        single(v.into_deserializer(), Unexpected::Other(&found))
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        single(BytesDeserializer::new(v), Unexpected::Bytes(v))
    }

    fn visit_borrowed_bytes<E>(self, v: &'de [u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        single(BorrowedBytesDeserializer::new(v), Unexpected::Bytes(v))
    }

    fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_bytes(&v)
    }
}
