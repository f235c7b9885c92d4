/// The ordering a binary heap maintains between a parent and its children.
///
/// `precedes(a, b)` is true iff `a` must sit strictly above `b`. Equal
/// elements never precede one another, so a child tied with its parent is
/// never promoted.
pub trait HeapOrder<T: ?Sized> {
    fn precedes(&self, a: &T, b: &T) -> bool;
}

/// Smallest element at the root.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MinOrder;

/// Largest element at the root.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: PartialOrd + ?Sized> HeapOrder<T> for MinOrder {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: PartialOrd + ?Sized> HeapOrder<T> for MaxOrder {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_order_is_strict() {
        assert!(MinOrder.precedes(&1, &2));
        assert!(!MinOrder.precedes(&2, &1));
        assert!(!MinOrder.precedes(&3, &3));
    }

    #[test]
    fn max_order_is_strict() {
        assert!(MaxOrder.precedes(&2, &1));
        assert!(!MaxOrder.precedes(&1, &2));
        assert!(!MaxOrder.precedes(&3, &3));
    }

    #[test]
    fn orders_work_on_floats_and_strings() {
        assert!(MinOrder.precedes(&-0.5_f64, &0.25));
        assert!(MaxOrder.precedes("pear", "apple"));
    }
}
