use quickcheck::{Arbitrary, Gen};

use crate::layout::Layout;

/// A valid [`Layout`] with spacing constants drawn from a handful of
/// representative values, so properties aren't only checked at the defaults.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ArbitraryLayout(pub(crate) Layout);

impl Arbitrary for ArbitraryLayout {
    fn arbitrary(g: &mut Gen) -> Self {
        let base_span = *g.choose(&[0.5, 1.0, 2.0, 3.0, 10.0]).unwrap();
        let vertical_spacing = *g.choose(&[0.25, 1.0, 1.2, 5.0]).unwrap();
        Self(Layout::new(base_span, vertical_spacing).unwrap())
    }
}
