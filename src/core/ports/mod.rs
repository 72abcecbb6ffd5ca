//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between core business logic and
//! whatever persists vouchers (in-memory map, JSON file, a real database).
//!
//! Implementations live in the `storage` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: In-memory fakes for unit tests
//! - **Flexibility**: Swap implementations without changing business logic
//! - **Clarity**: Clear boundaries between layers

mod voucher_store;

pub use voucher_store::VoucherStore;
