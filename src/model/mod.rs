//! Typed model entities stored in documents: joints, bodies, visuals, joint
//! frames, and the per-frame loader that ties them together.

pub(crate) mod body;
pub(crate) mod frame;
pub(crate) mod joint;
pub(crate) mod transform;
pub(crate) mod visuals;
