//! Domain Layer
//!
//! Pure farm bookkeeping logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Records with identity (Field, Animal, Greenhouse, DiaryEntry, CalendarEvent)
//! - `value_objects/` - Immutable value types (RecordId, YearMonth, category enums)
//! - `services/` - Calendar math, finance, weather analysis, validation
//! - `ports/` - Interface definitions for storage and remote services
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
