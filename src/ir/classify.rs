//! Instruction classification queries used by callers that walk a parsed
//! function looking for dead code or canonicalizing comparisons. Grounded on
//! the side-effect partition and predicate involutions a VMIR-style
//! optimizer consults before deleting or rewriting an instruction.

use super::instr::Instr;
use super::ops::Predicate;

/// Whether deleting this instruction (assuming its result, if any, is
/// unused) would change program behavior. Most terminators are
/// side-effecting regardless of their result, but `switch` is a terminator
/// that isn't — it's listed explicitly below rather than folded into a
/// blanket "every terminator" rule. `insertval` is side-effecting too (it
/// models a copy-and-patch of the aggregate), while `extractval` is not.
pub fn has_side_effects(instr: &Instr) -> bool {
    matches!(
        instr,
        Instr::Unreachable
            | Instr::Ret { .. }
            | Instr::Br { .. }
            | Instr::Resume { .. }
            | Instr::Store { .. }
            | Instr::Call { .. }
            | Instr::VaArg { .. }
            | Instr::InsertVal { .. }
            | Instr::LandingPad { .. }
            | Instr::Alloca { .. }
            | Instr::StackCopy { .. }
            | Instr::StackShrink { .. }
            | Instr::CmpBranch { .. }
    )
}

/// Logical negation of a comparison predicate: `invert_predicate(p)` holds
/// exactly when `p` does not. An involution over the full 26-value
/// alphabet.
pub fn invert_predicate(p: Predicate) -> Predicate {
    use Predicate::*;
    match p {
        FcmpFalse => FcmpTrue,
        FcmpTrue => FcmpFalse,
        FcmpOeq => FcmpUne,
        FcmpUne => FcmpOeq,
        FcmpOgt => FcmpUle,
        FcmpUle => FcmpOgt,
        FcmpOge => FcmpUlt,
        FcmpUlt => FcmpOge,
        FcmpOlt => FcmpUge,
        FcmpUge => FcmpOlt,
        FcmpOle => FcmpUgt,
        FcmpUgt => FcmpOle,
        FcmpOne => FcmpUeq,
        FcmpUeq => FcmpOne,
        FcmpOrd => FcmpUno,
        FcmpUno => FcmpOrd,
        IcmpEq => IcmpNe,
        IcmpNe => IcmpEq,
        IcmpUgt => IcmpUle,
        IcmpUle => IcmpUgt,
        IcmpUge => IcmpUlt,
        IcmpUlt => IcmpUge,
        IcmpSgt => IcmpSle,
        IcmpSle => IcmpSgt,
        IcmpSge => IcmpSlt,
        IcmpSlt => IcmpSge,
    }
}

/// Predicate to use after swapping a comparison's two operands: `p(a, b)`
/// holds exactly when `swap_predicate(p)(b, a)` does. Symmetric predicates
/// (equality, ordered/unordered) map to themselves.
pub fn swap_predicate(p: Predicate) -> Predicate {
    use Predicate::*;
    match p {
        FcmpFalse => FcmpFalse,
        FcmpTrue => FcmpTrue,
        FcmpOeq => FcmpOeq,
        FcmpOne => FcmpOne,
        FcmpOrd => FcmpOrd,
        FcmpUno => FcmpUno,
        FcmpUeq => FcmpUeq,
        FcmpUne => FcmpUne,
        FcmpOgt => FcmpOlt,
        FcmpOlt => FcmpOgt,
        FcmpOge => FcmpOle,
        FcmpOle => FcmpOge,
        FcmpUgt => FcmpUlt,
        FcmpUlt => FcmpUgt,
        FcmpUge => FcmpUle,
        FcmpUle => FcmpUge,
        IcmpEq => IcmpEq,
        IcmpNe => IcmpNe,
        IcmpUgt => IcmpUlt,
        IcmpUlt => IcmpUgt,
        IcmpUge => IcmpUle,
        IcmpUle => IcmpUge,
        IcmpSgt => IcmpSlt,
        IcmpSlt => IcmpSgt,
        IcmpSge => IcmpSle,
        IcmpSle => IcmpSge,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_is_involution_over_full_alphabet() {
        for code in (0..=15).chain(32..=41) {
            let p = Predicate::from_code(code).unwrap();
            assert_eq!(invert_predicate(invert_predicate(p)), p);
        }
    }

    #[test]
    fn swap_is_involution_over_full_alphabet() {
        for code in (0..=15).chain(32..=41) {
            let p = Predicate::from_code(code).unwrap();
            assert_eq!(swap_predicate(swap_predicate(p)), p);
        }
    }

    #[test]
    fn store_and_terminators_have_side_effects() {
        assert!(has_side_effects(&Instr::Unreachable));
    }

    #[test]
    fn switch_is_a_terminator_without_side_effects() {
        let switch = Instr::Switch { value: (0, 0), default_block: 0, cases: Vec::new() };
        assert!(switch.is_terminator());
        assert!(!has_side_effects(&switch));
    }

    #[test]
    fn insertval_has_side_effects_but_extractval_does_not() {
        use super::super::instr::InstrResult;
        let insert = Instr::InsertVal {
            src: (0, 0),
            replacement: (0, 0),
            indices: vec![0],
            result: InstrResult::Single(1),
        };
        assert!(has_side_effects(&insert));

        let extract = Instr::ExtractVal { value: (0, 0), indices: vec![0], result: InstrResult::Single(1) };
        assert!(!has_side_effects(&extract));
    }
}
