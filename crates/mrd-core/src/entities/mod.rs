//! Entity structs for all Meridian domain objects.
//!
//! Each entity mirrors a table in the relational hospital-management schema.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Join tables live alongside the aggregate
//! they join from.

mod assessment;
mod department;
mod hospital;
mod intent;
mod patient;
mod permission;
mod product;
mod role;
mod user;
mod vendor;
mod visit;

pub use assessment::Assessment;
pub use department::Department;
pub use hospital::Hospital;
pub use intent::{IntentStatus, IntentTrack, ProductIntent};
pub use patient::Patient;
pub use permission::{Permission, RolePermission};
pub use product::{Product, ProductDepartment};
pub use role::{Role, UserRole};
pub use user::{User, UserLogin};
pub use vendor::Vendor;
pub use visit::PatientVisit;
