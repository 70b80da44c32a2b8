// SPDX-License-Identifier: Apache-2.0

//! HDL dialects the ROM module can be rendered in.
//! Using a dedicated type avoids the ambiguity of passing around a bool.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerilogVersion {
    Verilog,
    SystemVerilog,
}

impl VerilogVersion {
    pub fn from_use_system_verilog(use_system_verilog: bool) -> Self {
        if use_system_verilog {
            VerilogVersion::SystemVerilog
        } else {
            VerilogVersion::Verilog
        }
    }

    /// Convenience helper.
    pub fn is_system_verilog(self) -> bool {
        matches!(self, VerilogVersion::SystemVerilog)
    }

    /// Keyword for ports and continuously-assigned nets.
    pub fn net_keyword(self) -> &'static str {
        match self {
            VerilogVersion::Verilog => "wire",
            VerilogVersion::SystemVerilog => "logic",
        }
    }

    /// Keyword for the memory array written by `$readmemh`.
    pub fn memory_keyword(self) -> &'static str {
        match self {
            VerilogVersion::Verilog => "reg",
            VerilogVersion::SystemVerilog => "logic",
        }
    }
}

impl Default for VerilogVersion {
    fn default() -> Self {
        VerilogVersion::Verilog
    }
}
