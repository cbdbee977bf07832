//! Iterator adapters over the core value types.
//!
//! These helpers surface search results as [`Maybe`] and [`Outcome`] values
//! instead of panicking accessors or sentinel defaults. They are plain
//! clients of the core algebra: absence comes from iterator exhaustion, and
//! faults are built through the ordinary factory operations.
//!
//! # Examples
//!
//! ```rust
//! use fallible::sequence::MaybeIterator;
//! use fallible::value::Maybe;
//!
//! let numbers = vec![1, 2, 3, 4];
//!
//! assert_eq!(numbers.iter().copied().try_first(), Maybe::just(1));
//! assert_eq!(numbers.iter().copied().try_first_where(|n| n % 2 == 0), Maybe::just(2));
//! assert_eq!(Vec::<i32>::new().into_iter().try_first(), Maybe::nothing());
//! ```

use crate::value::{Maybe, Outcome};

/// Search adapters available on every iterator.
///
/// All methods consume the iterator. The `try_*` family reports absence as
/// [`Maybe::Nothing`]; the `*_where` outcome variants report it as a failed
/// [`Outcome`] instead, for callers that want a typed fault.
pub trait MaybeIterator: Iterator + Sized {
    /// `Just` of the first element, `Nothing` when the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::sequence::MaybeIterator;
    /// use fallible::value::Maybe;
    ///
    /// assert_eq!([10, 20].into_iter().try_first(), Maybe::just(10));
    /// assert_eq!(std::iter::empty::<i32>().try_first(), Maybe::nothing());
    /// ```
    #[inline]
    fn try_first(mut self) -> Maybe<Self::Item> {
        Maybe::from(self.next())
    }

    /// `Just` of the first element matching the predicate, `Nothing` when
    /// none does.
    #[inline]
    fn try_first_where<P>(mut self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Maybe::from(self.find(predicate))
    }

    /// `Just` of the last element, `Nothing` when the iterator is empty.
    #[inline]
    fn try_last(self) -> Maybe<Self::Item> {
        Maybe::from(self.last())
    }

    /// `Just` of the last element matching the predicate, `Nothing` when
    /// none does.
    #[inline]
    fn try_last_where<P>(self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Maybe::from(self.filter(predicate).last())
    }

    /// `Just` of the element at `index`, `Nothing` when the iterator is
    /// shorter.
    #[inline]
    fn try_element_at(mut self, index: usize) -> Maybe<Self::Item> {
        Maybe::from(self.nth(index))
    }

    /// `Just` iff the iterator yields exactly one element.
    ///
    /// Zero elements and more than one element both yield `Nothing`: in
    /// either case there is no *single* value to speak of.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::sequence::MaybeIterator;
    /// use fallible::value::Maybe;
    ///
    /// assert_eq!([7].into_iter().try_single(), Maybe::just(7));
    /// assert_eq!([7, 8].into_iter().try_single(), Maybe::nothing());
    /// assert_eq!(std::iter::empty::<i32>().try_single(), Maybe::nothing());
    /// ```
    #[inline]
    fn try_single(mut self) -> Maybe<Self::Item> {
        match (self.next(), self.next()) {
            (Some(value), None) => Maybe::Just(value),
            _ => Maybe::Nothing,
        }
    }

    /// `Just` iff exactly one element matches the predicate.
    #[inline]
    fn try_single_where<P>(self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(predicate).try_single()
    }

    /// The first element matching the predicate, as an [`Outcome`].
    ///
    /// Fails with a fault when no element matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::sequence::MaybeIterator;
    ///
    /// let found = [1, 2, 3].into_iter().first_where(|n| n % 2 == 0);
    /// assert_eq!(found.value(), 2);
    ///
    /// let missing = [1, 3].into_iter().first_where(|n| n % 2 == 0);
    /// assert_eq!(missing.fault().message(), "no element matched the predicate");
    /// ```
    #[inline]
    fn first_where<P>(mut self, predicate: P) -> Outcome<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        match self.find(predicate) {
            Some(value) => Outcome::ok(value),
            None => Outcome::err_message("no element matched the predicate"),
        }
    }

    /// The last element matching the predicate, as an [`Outcome`].
    #[inline]
    fn last_where<P>(self, predicate: P) -> Outcome<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        match self.filter(predicate).last() {
            Some(value) => Outcome::ok(value),
            None => Outcome::err_message("no element matched the predicate"),
        }
    }

    /// Maps every element through a partial function, keeping the present
    /// results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::sequence::MaybeIterator;
    /// use fallible::value::Maybe;
    ///
    /// let halves: Vec<i32> = [1, 2, 3, 4]
    ///     .into_iter()
    ///     .choose(|n| if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() })
    ///     .collect();
    /// assert_eq!(halves, vec![1, 2]);
    /// ```
    #[inline]
    fn choose<U, F>(self, mut chooser: F) -> impl Iterator<Item = U>
    where
        F: FnMut(Self::Item) -> Maybe<U>,
    {
        self.filter_map(move |item| Option::from(chooser(item)))
    }
}

impl<I: Iterator> MaybeIterator for I {}

/// Adapters for iterators whose items are already [`Maybe`] values.
pub trait MaybeSequence<T>: Iterator<Item = Maybe<T>> + Sized {
    /// The values of all present elements, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::sequence::MaybeSequence;
    /// use fallible::value::Maybe;
    ///
    /// let items = vec![Maybe::just(1), Maybe::nothing(), Maybe::just(3)];
    /// assert_eq!(items.into_iter().collect_present(), vec![1, 3]);
    /// ```
    #[inline]
    fn collect_present(self) -> Vec<T> {
        self.filter_map(Option::from).collect()
    }

    /// `Just` of all the values when every element is present, `Nothing`
    /// otherwise.
    ///
    /// The input is evaluated at most once; the first absent element stops
    /// the traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::sequence::MaybeSequence;
    /// use fallible::value::Maybe;
    ///
    /// let all = vec![Maybe::just(1), Maybe::just(2)];
    /// assert_eq!(all.into_iter().flatten_all(), Maybe::just(vec![1, 2]));
    ///
    /// let holed = vec![Maybe::just(1), Maybe::nothing()];
    /// assert_eq!(holed.into_iter().flatten_all(), Maybe::nothing());
    /// ```
    #[inline]
    fn flatten_all(self) -> Maybe<Vec<T>> {
        let mut values = Vec::new();
        for element in self {
            match element {
                Maybe::Just(value) => values.push(value),
                Maybe::Nothing => return Maybe::Nothing,
            }
        }
        Maybe::Just(values)
    }
}

impl<T, I> MaybeSequence<T> for I where I: Iterator<Item = Maybe<T>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn try_single_distinguishes_cardinalities() {
        assert_eq!([7].into_iter().try_single(), Maybe::just(7));
        assert_eq!([7, 8].into_iter().try_single(), Maybe::nothing());
        assert_eq!(std::iter::empty::<i32>().try_single(), Maybe::nothing());
    }

    #[rstest]
    fn choose_keeps_present_results() {
        let evens: Vec<i32> = (1..=6)
            .choose(|n| {
                if n % 2 == 0 {
                    Maybe::just(n * 10)
                } else {
                    Maybe::nothing()
                }
            })
            .collect();
        assert_eq!(evens, vec![20, 40, 60]);
    }
}
