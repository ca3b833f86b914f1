use core::fmt;
use core::marker::PhantomData;

use serde_::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde_::ser::{Serialize, Serializer};

use crate::Deque;

/// Helper picked from the serde repository https://github.com/serde-rs/serde.
mod helper {

    use serde_::de::{Deserialize, DeserializeSeed, Deserializer};

    /// https://github.com/serde-rs/serde/blob/24e6acbfaeb18af978012b904209632f012eb54d/serde/src/private/de.rs#L2634-L2650
    pub(super) struct InPlaceSeed<'a, T>(pub &'a mut T);

    impl<'a, 'de, T> DeserializeSeed<'de> for InPlaceSeed<'a, T>
    where
        T: Deserialize<'de>,
    {
        type Value = ();
        fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            T::deserialize_in_place(deserializer, self.0)
        }
    }
}

impl<T, F> Serialize for Deque<T, F>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self)
    }
}

// Only the default ordering can be reconstructed; a custom predicate is not data.
impl<'de, T> Deserialize<'de> for Deque<T>
where
    T: Deserialize<'de> + PartialOrd,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DequeVisitor<T> {
            marker: PhantomData<T>,
        }
        impl<'de, T> Visitor<'de> for DequeVisitor<T>
        where
            T: Deserialize<'de> + PartialOrd,
        {
            type Value = Deque<T>;
            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a sequence")
            }
            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut values = Deque::new();
                while let Some(value) = seq.next_element()? {
                    values
                        .try_push_back(value)
                        .map_err(<A::Error as serde_::de::Error>::custom)?;
                }
                Ok(values)
            }
        }
        let visitor = DequeVisitor {
            marker: PhantomData,
        };
        deserializer.deserialize_seq(visitor)
    }

    fn deserialize_in_place<D>(deserializer: D, place: &mut Self) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DequeInPlaceVisitor<'a, T>(&'a mut Deque<T>);
        impl<'a, 'de, T> Visitor<'de> for DequeInPlaceVisitor<'a, T>
        where
            T: Deserialize<'de> + PartialOrd,
        {
            type Value = ();
            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a sequence")
            }
            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                for i in 0..self.0.len() {
                    let next = {
                        let next_place = helper::InPlaceSeed(&mut self.0[i]);
                        seq.next_element_seed(next_place)?
                    };
                    if next.is_none() {
                        self.0.truncate(i);
                        return Ok(());
                    }
                }
                while let Some(value) = seq.next_element()? {
                    self.0
                        .try_push_back(value)
                        .map_err(<A::Error as serde_::de::Error>::custom)?;
                }
                Ok(())
            }
        }
        deserializer.deserialize_seq(DequeInPlaceVisitor(place))
    }
}
