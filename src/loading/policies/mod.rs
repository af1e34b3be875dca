mod overflow_policy;

pub use overflow_policy::OverflowPolicy;
