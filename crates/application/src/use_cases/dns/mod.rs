mod forward_query;

pub use forward_query::{build_response, build_sub_query, ForwardQueryUseCase};
