//! Typed value model and multi-radix text codec for the values carried by
//! Logix-style PLC project export files.

/// Atomic values, radix codecs, member classification, structure types,
/// and tag path composition.
pub mod logix;
