#[derive(Debug, Clone, Copy)]
pub struct ErrorCode {
    pub code: &'static str,
    pub title: &'static str,
}

pub const CIRCULAR_CONSTANT: ErrorCode = ErrorCode {
    code: "E070",
    title: "CIRCULAR CONSTANT REFERENCE",
};
pub const MALFORMED_RESOLVED_TREE: ErrorCode = ErrorCode {
    code: "E071",
    title: "MALFORMED RESOLVED TREE",
};
