use crate::document::path::BindError;
use crate::document::session::{DocNode, Document};
use crate::foundation::error::PuppeteerResult;
use crate::model::body::Body;
use crate::model::joint::Joint;
use crate::model::transform::SpatialTransform;
use crate::model::visuals::Visuals;

/// One segment of a model: a body attached to its parent by a joint.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ModelFrame {
    /// Segment name; `frame<N>` when the document has none.
    pub name: String,
    /// Parent segment name; `ROOT` for top-level segments.
    pub parent: String,
    /// Joint connecting to the parent.
    pub joint: Joint,
    /// Inertial parameters.
    pub body: Body,
    /// Joint placement in the parent frame.
    pub joint_frame: SpatialTransform,
    /// Visuals drawn for this segment.
    pub visuals: Vec<Visuals>,
}

impl ModelFrame {
    /// Parent name of top-level segments.
    pub const ROOT_PARENT: &'static str = "ROOT";

    /// Decode the frame stored at `node`, filling absent entries with defaults.
    pub fn from_node(node: &DocNode, ordinal: usize) -> Result<Self, BindError> {
        Ok(Self {
            name: node
                .field("name")
                .get_or_default(format!("frame{ordinal}"))?,
            parent: node
                .field("parent")
                .get_or_default(Self::ROOT_PARENT.to_owned())?,
            joint: node.field("joint").get_or_default(Joint::Fixed)?,
            body: node.field("body").get_or_default(Body::default())?,
            joint_frame: node
                .field("joint_frame")
                .get_or_default(SpatialTransform::IDENTITY)?,
            visuals: node.field("visuals").get_or_default(Vec::new())?,
        })
    }
}

/// Decode every entry of the document's `frames` array, in order.
///
/// Stops at the first malformed entry; the error names its path.
#[tracing::instrument(skip(doc))]
pub fn load_model_frames(doc: &Document) -> PuppeteerResult<Vec<ModelFrame>> {
    let frames = doc.field("frames");
    let count = frames.len();
    let mut out = Vec::with_capacity(count);
    for i in 1..=count {
        out.push(ModelFrame::from_node(&frames.index(i), i)?);
    }
    tracing::debug!(count, "loaded model frames");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/model/frame.rs"]
mod tests;
