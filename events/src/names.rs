//! Notification names emitted by the core and the managers.

pub const BEFORE_BEGIN_TRANSACTION: &str = "beforeBeginTransaction";
pub const AFTER_BEGIN_TRANSACTION: &str = "afterBeginTransaction";
pub const BEFORE_COMMIT: &str = "beforeCommit";
pub const AFTER_COMMIT: &str = "afterCommit";
pub const BEFORE_ROLLBACK: &str = "beforeRollback";
pub const AFTER_ROLLBACK: &str = "afterRollback";

pub const BEFORE_ADD_NODES: &str = "beforeAddNodes";
pub const AFTER_ADD_NODES: &str = "afterAddNodes";
pub const BEFORE_UPDATE_NODES: &str = "beforeUpdateNodes";
pub const AFTER_UPDATE_NODES: &str = "afterUpdateNodes";
pub const BEFORE_DELETE_NODES: &str = "beforeDeleteNodes";
pub const AFTER_DELETE_NODES: &str = "afterDeleteNodes";

pub const BEFORE_ADD_EDGES: &str = "beforeAddEdges";
pub const AFTER_ADD_EDGES: &str = "afterAddEdges";
pub const BEFORE_UPDATE_EDGES: &str = "beforeUpdateEdges";
pub const AFTER_UPDATE_EDGES: &str = "afterUpdateEdges";
pub const BEFORE_DELETE_EDGES: &str = "beforeDeleteEdges";
pub const AFTER_DELETE_EDGES: &str = "afterDeleteEdges";

/// Every notification name above, transaction lifecycle first.
pub const ALL_EVENTS: &[&str] = &[
    BEFORE_BEGIN_TRANSACTION,
    AFTER_BEGIN_TRANSACTION,
    BEFORE_COMMIT,
    AFTER_COMMIT,
    BEFORE_ROLLBACK,
    AFTER_ROLLBACK,
    BEFORE_ADD_NODES,
    AFTER_ADD_NODES,
    BEFORE_UPDATE_NODES,
    AFTER_UPDATE_NODES,
    BEFORE_DELETE_NODES,
    AFTER_DELETE_NODES,
    BEFORE_ADD_EDGES,
    AFTER_ADD_EDGES,
    BEFORE_UPDATE_EDGES,
    AFTER_UPDATE_EDGES,
    BEFORE_DELETE_EDGES,
    AFTER_DELETE_EDGES,
];
