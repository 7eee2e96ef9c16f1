//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod application_repo;
pub mod company_repo;
pub mod department_repo;
pub mod employer_repo;
pub mod faculty_repo;
pub mod grade_repo;
pub mod offer_repo;
pub mod position_repo;
pub mod resume_repo;
pub mod session_repo;
pub mod student_repo;
pub mod summary_repo;

pub use application_repo::ApplicationRepo;
pub use company_repo::CompanyRepo;
pub use department_repo::DepartmentRepo;
pub use employer_repo::EmployerRepo;
pub use faculty_repo::FacultyRepo;
pub use grade_repo::GradeRepo;
pub use offer_repo::OfferRepo;
pub use position_repo::PositionRepo;
pub use resume_repo::ResumeRepo;
pub use session_repo::SessionRepo;
pub use student_repo::StudentRepo;
pub use summary_repo::SummaryRepo;
