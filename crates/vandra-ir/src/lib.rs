//! Vandra Circuit Intermediate Representation
//!
//! Core data structures for representing the quantum circuits produced by the
//! coined-walk synthesizers. A circuit is an ordered instruction list over a
//! small gate set whose only entangling primitive is the arbitrary-arity
//! controlled bit-flip ([`Gate::Mcx`]) — the single capability an execution
//! backend must provide.
//!
//! # Core Components
//!
//! - **Addressing**: [`QubitId`], [`ClbitId`], [`Qubit`] (with named register
//!   membership for the `coin`/`pos`/`x`/`y` registers)
//! - **Gates**: [`Gate`] — preparation gates plus the multi-controlled flip
//! - **Instructions**: [`Instruction`] combining a gate with its operands
//! - **Circuit**: [`Circuit`] fluent builder over the ordered sequence
//!
//! # Example
//!
//! ```rust
//! use vandra_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new("coin-toss");
//! let pos = circuit.add_qreg("pos", 2);
//! let coin = circuit.add_qreg("coin", 1);
//!
//! circuit.h(coin[0]).unwrap();
//! circuit.mcx([coin[0], pos[1]], pos[0]).unwrap();
//! circuit.measure_register(&pos).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 3);
//! assert_eq!(circuit.num_clbits(), 2);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::Gate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, Qubit, QubitId};
