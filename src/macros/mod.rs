
/// This macro extracts owned value from cow
/// but if cow is borrowed it evaluates the given default instead.
///
/// It's helpful with `Regex::replace` and friends, which return
/// `Cow::Borrowed` when nothing was replaced: the untouched input can be
/// reused (or the loop left) without copying it.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        if let std::borrow::Cow::Owned(s) = $getcow {
            s
        } else {
            $default
        }
    }};
}

pub(crate) use owned_from_cow_or;
