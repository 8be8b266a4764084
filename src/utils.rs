/// Skip predicate for integers and booleans, which are omitted when zero or `false`.
pub(crate) fn is_default<D: Default + Eq>(value: &D) -> bool {
    value == &D::default()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_is_default() {
        assert!(is_default(&0i64));
        assert!(is_default(&false));
        assert!(!is_default(&1i64));
        assert!(!is_default(&true));
    }
}
