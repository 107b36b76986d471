use crate::scene::{MaterialId, NodeId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("unknown scene node {0:?}")]
    UnknownNode(NodeId),
    #[error("unknown material {0:?}")]
    UnknownMaterial(MaterialId),
    #[error("`{0}` has no mesh data")]
    EmptyMesh(String),
}
