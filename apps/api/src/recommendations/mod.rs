// Learning-path recommendations keyed by (interest, level).
// The advice blocks here are independent of the role roadmaps in `catalog`.

pub mod composer;
pub mod handlers;
