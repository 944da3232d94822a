use serde::{Serialize, Serializer};

use crate::OneOrMany;

/// `One` is written bare, `Many` as a sequence (even when it holds a single element), and `None`
/// as the format's null marker.
impl<T> Serialize for OneOrMany<T>
where
    T: Serialize,
{
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::One(value) => value.serialize(serializer),
            Self::Many(values) => serializer.collect_seq(values),
            Self::None => serializer.serialize_none(),
        }
    }
}
