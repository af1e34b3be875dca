/// Use cases module containing application business logic orchestration
mod load_resource;

pub use load_resource::LoadResourceUseCase;
