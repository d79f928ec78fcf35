/// Use cases module containing application business logic orchestration
mod generate_license_page;
mod resolve_licenses;

pub use generate_license_page::GenerateLicensePageUseCase;
pub use resolve_licenses::ResolveLicensesUseCase;
