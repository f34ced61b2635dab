//! Property tests for release version ordering and labels

use proptest::prelude::*;
use roadmap_model::{parse_version_label, version_label, ReleaseVersion};

fn any_version() -> impl Strategy<Value = ReleaseVersion> {
    (0u32..20, 0u32..20).prop_map(|(major, minor)| ReleaseVersion::new(major, minor))
}

proptest! {
    #[test]
    fn ordering_is_numeric_per_component(a in any_version(), b in any_version()) {
        prop_assert_eq!(a.cmp(&b), (a.major, a.minor).cmp(&(b.major, b.minor)));
    }

    #[test]
    fn minor_ten_sorts_after_minor_nine(major in 0u32..20) {
        prop_assert!(ReleaseVersion::new(major, 9) < ReleaseVersion::new(major, 10));
        prop_assert!(ReleaseVersion::new(major, 10) < ReleaseVersion::new(major + 1, 0));
    }

    #[test]
    fn label_names_the_major(version in any_version()) {
        let label = version.label();
        prop_assert_eq!(&label, &version_label(version.major));
        prop_assert_eq!(parse_version_label(&label), Ok(version.major));
    }
}
