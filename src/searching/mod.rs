pub mod binary_search;
pub mod binary_search_on_answer;
pub mod exponential_search;
pub mod fibonacci_search;
pub mod hash_search;
pub mod interpolation_search;
pub mod jump_search;
pub mod linear_search;
pub mod self_organizing;
pub mod sentinel_search;
pub mod ternary_search;
