/// Use cases module containing application business logic orchestration
mod resolve_packages;
mod resolve_project;

pub use resolve_packages::ResolvePackagesUseCase;
pub use resolve_project::ResolveProjectUseCase;
