use std::slice;

/// A list that stays allocation free while it holds zero or one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Array<T> {
    None,
    One(T),
    Many(Vec<T>),
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> Array<T> {
    pub fn append(&mut self, other: Self) {
        let combined = match (std::mem::take(self), other) {
            (Self::None, items) | (items, Self::None) => items,
            (Self::One(a), Self::One(b)) => Self::Many(vec![a, b]),
            (Self::One(a), Self::Many(mut b)) => {
                b.insert(0, a);
                Self::Many(b)
            }
            (Self::Many(mut a), Self::One(b)) => {
                a.push(b);
                Self::Many(a)
            }
            (Self::Many(mut a), Self::Many(mut b)) => {
                a.append(&mut b);
                Self::Many(a)
            }
        };
        *self = combined;
    }

    pub fn len(&self) -> usize {
        match self {
            Array::None => 0,
            Array::One(_) => 1,
            Array::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Array::None => &[],
            Array::One(one) => slice::from_ref(one),
            Array::Many(many) => many.as_slice(),
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::None => Vec::new(),
            Self::One(one) => Vec::from([one]),
            Self::Many(many) => many,
        }
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(mut value: Vec<T>) -> Self {
        match value.len() {
            0 => Self::None,
            1 => match value.pop() {
                Some(one) => Self::One(one),
                None => Self::None,
            },
            _ => Self::Many(value),
        }
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut array = Array::None;
        array.append(Array::One(1));
        assert_eq!(Array::One(1), array);
        array.append(Array::One(2));
        array.append(Array::Many(vec![3, 4]));
        assert_eq!(vec![1, 2, 3, 4], array.into_vec());
    }

    #[test]
    fn test_one_prepends_many() {
        let mut array = Array::One(0);
        array.append(Array::Many(vec![1, 2]));
        assert_eq!(&[0, 1, 2], array.as_slice());
    }

    #[test]
    fn test_from_vec_shape() {
        assert_eq!(Array::<i32>::None, Array::from(Vec::new()));
        assert_eq!(Array::One(7), Array::from(vec![7]));
        assert_eq!(2, Array::from(vec![7, 8]).len());
        assert!(Array::<u8>::default().is_empty());
    }
}
