mod convert_audit;

pub use convert_audit::ConvertAuditUseCase;
