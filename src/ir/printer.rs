//! Deterministic single-line text rendering of instructions, blocks and
//! functions. Grounded on a VMIR-style disassembly printer: one line per
//! instruction, result first when present, mnemonic from [`super::ops`],
//! operands as `%<id>`.

use std::fmt::{self, Write as _};

use super::block::BasicBlock;
use super::function::Function;
use super::instr::Instr;
use super::value::Vtp;

fn fmt_vtp(vtp: Vtp) -> String {
    format!("%{}", vtp.1)
}

fn write_result(out: &mut String, result: Option<u32>) {
    if let Some(id) = result {
        let _ = write!(out, "%{id} = ");
    }
}

pub fn format_instr(instr: &Instr) -> String {
    let mut out = String::new();
    write_result(&mut out, instr.result());
    match instr {
        Instr::Unreachable => out.push_str("unreachable"),
        Instr::Ret { value, .. } => match value {
            Some(v) => {
                let _ = write!(out, "ret {}", fmt_vtp(*v));
            }
            None => out.push_str("ret void"),
        },
        Instr::BinOp { op, lhs, rhs, .. } => {
            let _ = write!(out, "{} {}, {}", op.mnemonic(), fmt_vtp(*lhs), fmt_vtp(*rhs));
        }
        Instr::Cast { op, value, .. } => {
            let _ = write!(out, "{} {}", op.mnemonic(), fmt_vtp(*value));
        }
        Instr::Load { ptr, .. } => {
            let _ = write!(out, "load {}", fmt_vtp(*ptr));
        }
        Instr::Store { ptr, value } => {
            let _ = write!(out, "store {}, {}", fmt_vtp(*value), fmt_vtp(*ptr));
        }
        Instr::Gep { base, indices, .. } => {
            let _ = write!(out, "gep {}", fmt_vtp(*base));
            for idx in indices {
                let _ = write!(out, ", {}", fmt_vtp(idx.value));
            }
        }
        Instr::Cmp2 { op, lhs, rhs, .. } => {
            let _ = write!(out, "{} {}, {}", op.mnemonic(), fmt_vtp(*lhs), fmt_vtp(*rhs));
        }
        Instr::Br { condition, true_branch, false_branch } => match condition {
            Some(c) => {
                let _ = write!(out, "br {}, bb{true_branch}, bb{false_branch}", fmt_vtp(*c));
            }
            None => {
                let _ = write!(out, "br bb{true_branch}");
            }
        },
        Instr::Phi { nodes, .. } => {
            out.push_str("phi ");
            for (i, n) in nodes.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "[{}, bb{}]", fmt_vtp(n.value), n.predecessor);
            }
        }
        Instr::Call { is_invoke, callee, args, normal_dest, unwind_dest, .. } => {
            let mnemonic = if *is_invoke { "invoke" } else { "call" };
            let _ = write!(out, "{mnemonic} {}(", fmt_vtp(*callee));
            for (i, a) in args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&fmt_vtp(a.value));
            }
            out.push(')');
            if let (Some(n), Some(u)) = (normal_dest, unwind_dest) {
                let _ = write!(out, " to bb{n} unwind bb{u}");
            }
        }
        Instr::Switch { value, default_block, cases } => {
            let _ = write!(out, "switch {}, bb{default_block} [", fmt_vtp(*value));
            for (i, c) in cases.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{} bb{}", c.masked_value, c.target);
            }
            out.push(']');
        }
        Instr::Alloca { num_items, size, alignment, .. } => {
            let _ = write!(out, "alloca {}, size {size}, align {alignment}", fmt_vtp(*num_items));
        }
        Instr::Select { predicate, true_value, false_value, .. } => {
            let _ = write!(
                out,
                "select {}, {}, {}",
                fmt_vtp(*predicate),
                fmt_vtp(*true_value),
                fmt_vtp(*false_value)
            );
        }
        Instr::VaArg { value, .. } => {
            let _ = write!(out, "vaarg {}", fmt_vtp(*value));
        }
        Instr::ExtractVal { value, indices, .. } => {
            let _ = write!(out, "extractval {}", fmt_vtp(*value));
            for idx in indices {
                let _ = write!(out, ", {idx}");
            }
        }
        Instr::InsertVal { src, replacement, indices, .. } => {
            let _ = write!(out, "insertval {}, {}", fmt_vtp(*src), fmt_vtp(*replacement));
            for idx in indices {
                let _ = write!(out, ", {idx}");
            }
        }
        Instr::LandingPad { is_cleanup, clauses, .. } => {
            out.push_str("landingpad");
            if *is_cleanup {
                out.push_str(" cleanup");
            }
            for c in clauses {
                let kind = if c.is_catch { "catch" } else { "filter" };
                let _ = write!(out, " {kind} %{}", c.clause);
            }
        }
        Instr::Resume { values } => {
            out.push_str("resume");
            for v in values {
                let _ = write!(out, " {}", fmt_vtp(*v));
            }
        }
        Instr::CmpBranch { op, lhs, rhs, true_branch, false_branch } => {
            let _ = write!(
                out,
                "cmp_branch {} {}, {}, bb{true_branch}, bb{false_branch}",
                op.mnemonic(),
                fmt_vtp(*lhs),
                fmt_vtp(*rhs)
            );
        }
        Instr::CmpSelect { op, lhs, rhs, true_value, false_value, .. } => {
            let _ = write!(
                out,
                "cmp_select {} {}, {}, {}, {}",
                op.mnemonic(),
                fmt_vtp(*lhs),
                fmt_vtp(*rhs),
                fmt_vtp(*true_value),
                fmt_vtp(*false_value)
            );
        }
        Instr::Lea { base, immediate_offset, value_offset, value_offset_multiply, .. } => {
            let _ = write!(out, "lea {}, {immediate_offset}", fmt_vtp(*base));
            if let Some(v) = value_offset {
                let _ = write!(out, ", {} * {value_offset_multiply}", fmt_vtp(*v));
            }
        }
        Instr::Move { value, .. } => {
            let _ = write!(out, "move {}", fmt_vtp(*value));
        }
        Instr::StackCopy { value, size, .. } => {
            let _ = write!(out, "stackcopy {}, {size}", fmt_vtp(*value));
        }
        Instr::StackShrink { size } => {
            let _ = write!(out, "stackshrink {size}");
        }
        Instr::Mla { arg1, arg2, arg3, .. } => {
            let _ = write!(
                out,
                "mla {}, {}, {}",
                fmt_vtp(*arg1),
                fmt_vtp(*arg2),
                fmt_vtp(*arg3)
            );
        }
    }
    out
}

pub fn format_block(block: &BasicBlock) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "bb{}:", block.id);
    for instr in &block.instructions {
        let _ = writeln!(out, "  {}", format_instr(instr));
    }
    out
}

pub fn format_function(function: &Function) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "function {} {{", function.name);
    for block in &function.blocks {
        out.push_str(&format_block(block));
    }
    out.push('}');
    out
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_instr(self))
    }
}
