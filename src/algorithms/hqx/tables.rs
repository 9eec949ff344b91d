//! Blend tables for HQ2x and HQ3x.
//!
//! Each case lists the patterns it covers and, for every output sub-pixel in
//! row-major order, either a fixed blend (`f`) or a comparison between two
//! orthogonal neighbours (`t`) picking one blend when they differ and
//! another when they match.
//!
//! Blends are named `MIX_<row><col>_<ids>_<weights>`: the sub-pixel the
//! blend was written for, the window ids it reads and their weights.
//! HQ2x uses rows and columns 0..2, HQ3x 0..3, and the two share names
//! where the blend is the same.

use super::{m2, m3, Blend, Slot};

/// Patterns sharing one row of sub-pixel rules.
pub(super) type Case<const N: usize> = (&'static [u8], [Slot; N]);

const W_N: (u8, u8) = (3, 1);
const N_E: (u8, u8) = (1, 5);
const E_S: (u8, u8) = (5, 7);
const S_W: (u8, u8) = (7, 3);

const fn f(blend: Blend) -> Slot {
    Slot::fixed(blend)
}

/// `different` when the pair differs, `same` otherwise.
const fn t(pair: (u8, u8), different: Blend, same: Blend) -> Slot {
    Slot::tested(pair.0, pair.1, same, different)
}

/// Expand cases into a table indexed by pattern.
pub(super) const fn index<const N: usize>(cases: &[Case<N>]) -> [[Slot; N]; 256] {
    let mut table = [[Slot::fixed(Blend::Center); N]; 256];
    let mut i = 0;
    while i < cases.len() {
        let patterns = cases[i].0;
        let mut j = 0;
        while j < patterns.len() {
            table[patterns[j] as usize] = cases[i].1;
            j += 1;
        }
        i += 1;
    }
    table
}

const MIX_00_4: Blend = Blend::Center;
const MIX_00_4_0_3_1: Blend = m2(4, 0, 3, 1);
const MIX_00_4_3_3_1: Blend = m2(4, 3, 3, 1);
const MIX_00_4_1_3_1: Blend = m2(4, 1, 3, 1);
const MIX_00_3_1_1_1: Blend = m2(3, 1, 1, 1);
const MIX_00_4_3_1_2_1_1: Blend = m3(4, 3, 1, 2, 1, 1);
const MIX_00_4_3_1_2_7_7: Blend = m3(4, 3, 1, 2, 7, 7);
const MIX_00_4_0_1_2_1_1: Blend = m3(4, 0, 1, 2, 1, 1);
const MIX_00_4_0_3_2_1_1: Blend = m3(4, 0, 3, 2, 1, 1);
const MIX_00_4_1_3_5_2_1: Blend = m3(4, 1, 3, 5, 2, 1);
const MIX_00_4_3_1_5_2_1: Blend = m3(4, 3, 1, 5, 2, 1);
const MIX_00_4_3_1_6_1_1: Blend = m3(4, 3, 1, 6, 1, 1);
const MIX_00_4_3_1_2_3_3: Blend = m3(4, 3, 1, 2, 3, 3);
const MIX_00_4_3_1_14_1_1: Blend = m3(4, 3, 1, 14, 1, 1);

const MIX_01_4: Blend = Blend::Center;
const MIX_01_4_2_3_1: Blend = m2(4, 2, 3, 1);
const MIX_01_4_1_3_1: Blend = m2(4, 1, 3, 1);
const MIX_01_1_4_3_1: Blend = m2(1, 4, 3, 1);
const MIX_01_4_5_3_1: Blend = m2(4, 5, 3, 1);
const MIX_01_4_1_7_1: Blend = m2(4, 1, 7, 1);
const MIX_01_4_1_5_2_1_1: Blend = m3(4, 1, 5, 2, 1, 1);
const MIX_01_4_2_5_2_1_1: Blend = m3(4, 2, 5, 2, 1, 1);
const MIX_01_4_2_1_2_1_1: Blend = m3(4, 2, 1, 2, 1, 1);
const MIX_01_4_5_1_5_2_1: Blend = m3(4, 5, 1, 5, 2, 1);
const MIX_01_4_1_5_5_2_1: Blend = m3(4, 1, 5, 5, 2, 1);
const MIX_01_4_1_5_6_1_1: Blend = m3(4, 1, 5, 6, 1, 1);
const MIX_01_4_1_5_2_3_3: Blend = m3(4, 1, 5, 2, 3, 3);
const MIX_01_4_1_5_14_1_1: Blend = m3(4, 1, 5, 14, 1, 1);

const MIX_02_4: Blend = Blend::Center;
const MIX_02_4_2_3_1: Blend = m2(4, 2, 3, 1);
const MIX_02_4_1_3_1: Blend = m2(4, 1, 3, 1);
const MIX_02_4_5_3_1: Blend = m2(4, 5, 3, 1);
const MIX_02_4_1_5_2_1_1: Blend = m3(4, 1, 5, 2, 1, 1);
const MIX_02_4_1_5_2_7_7: Blend = m3(4, 1, 5, 2, 7, 7);
const MIX_02_1_5_1_1: Blend = m2(1, 5, 1, 1);

const MIX_10_4: Blend = Blend::Center;
const MIX_10_4_6_3_1: Blend = m2(4, 6, 3, 1);
const MIX_10_4_7_3_1: Blend = m2(4, 7, 3, 1);
const MIX_10_4_3_3_1: Blend = m2(4, 3, 3, 1);
const MIX_10_4_7_3_2_1_1: Blend = m3(4, 7, 3, 2, 1, 1);
const MIX_10_4_6_3_2_1_1: Blend = m3(4, 6, 3, 2, 1, 1);
const MIX_10_4_6_7_2_1_1: Blend = m3(4, 6, 7, 2, 1, 1);
const MIX_10_4_3_7_5_2_1: Blend = m3(4, 3, 7, 5, 2, 1);
const MIX_10_4_7_3_5_2_1: Blend = m3(4, 7, 3, 5, 2, 1);
const MIX_10_4_7_3_6_1_1: Blend = m3(4, 7, 3, 6, 1, 1);
const MIX_10_4_7_3_2_3_3: Blend = m3(4, 7, 3, 2, 3, 3);
const MIX_10_4_7_3_14_1_1: Blend = m3(4, 7, 3, 14, 1, 1);
const MIX_10_4_3_7_1: Blend = m2(4, 3, 7, 1);
const MIX_10_3_4_3_1: Blend = m2(3, 4, 3, 1);

const MIX_11_4: Blend = Blend::Center;
const MIX_11_4_8_3_1: Blend = m2(4, 8, 3, 1);
const MIX_11_4_5_3_1: Blend = m2(4, 5, 3, 1);
const MIX_11_4_7_3_1: Blend = m2(4, 7, 3, 1);
const MIX_11_4_5_7_2_1_1: Blend = m3(4, 5, 7, 2, 1, 1);
const MIX_11_4_8_7_2_1_1: Blend = m3(4, 8, 7, 2, 1, 1);
const MIX_11_4_8_5_2_1_1: Blend = m3(4, 8, 5, 2, 1, 1);
const MIX_11_4_7_5_5_2_1: Blend = m3(4, 7, 5, 5, 2, 1);
const MIX_11_4_5_7_5_2_1: Blend = m3(4, 5, 7, 5, 2, 1);
const MIX_11_4_5_7_6_1_1: Blend = m3(4, 5, 7, 6, 1, 1);
const MIX_11_4_5_7_2_3_3: Blend = m3(4, 5, 7, 2, 3, 3);
const MIX_11_4_5_7_14_1_1: Blend = m3(4, 5, 7, 14, 1, 1);

const MIX_12_4: Blend = Blend::Center;
const MIX_12_4_5_3_1: Blend = m2(4, 5, 3, 1);
const MIX_12_4_5_7_1: Blend = m2(4, 5, 7, 1);
const MIX_12_5_4_3_1: Blend = m2(5, 4, 3, 1);

const MIX_20_4: Blend = Blend::Center;
const MIX_20_4_6_3_1: Blend = m2(4, 6, 3, 1);
const MIX_20_4_7_3_1: Blend = m2(4, 7, 3, 1);
const MIX_20_4_3_3_1: Blend = m2(4, 3, 3, 1);
const MIX_20_4_7_3_2_1_1: Blend = m3(4, 7, 3, 2, 1, 1);
const MIX_20_4_7_3_2_7_7: Blend = m3(4, 7, 3, 2, 7, 7);
const MIX_20_7_3_1_1: Blend = m2(7, 3, 1, 1);

const MIX_21_4: Blend = Blend::Center;
const MIX_21_4_7_3_1: Blend = m2(4, 7, 3, 1);
const MIX_21_4_7_7_1: Blend = m2(4, 7, 7, 1);
const MIX_21_7_4_3_1: Blend = m2(7, 4, 3, 1);

const MIX_22_4: Blend = Blend::Center;
const MIX_22_4_8_3_1: Blend = m2(4, 8, 3, 1);
const MIX_22_4_7_3_1: Blend = m2(4, 7, 3, 1);
const MIX_22_4_5_3_1: Blend = m2(4, 5, 3, 1);
const MIX_22_4_5_7_2_1_1: Blend = m3(4, 5, 7, 2, 1, 1);
const MIX_22_4_5_7_2_7_7: Blend = m3(4, 5, 7, 2, 7, 7);
const MIX_22_5_7_1_1: Blend = m2(5, 7, 1, 1);

#[rustfmt::skip]
pub(super) const HQ2X_CASES: &[Case<4>] = &[
    (&[0, 1, 4, 32, 128, 5, 132, 160, 33, 129, 36, 133, 164, 161, 37, 165], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_7_3_2_1_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[2, 34, 130, 162], [
        f(MIX_00_4_0_3_2_1_1), f(MIX_01_4_2_5_2_1_1),
        f(MIX_10_4_7_3_2_1_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[16, 17, 48, 49], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_2_1_2_1_1),
        f(MIX_10_4_7_3_2_1_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[64, 65, 68, 69], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_6_3_2_1_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[8, 12, 136, 140], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[3, 35, 131, 163], [
        f(MIX_00_4_3_3_1), f(MIX_01_4_2_5_2_1_1),
        f(MIX_10_4_7_3_2_1_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[6, 38, 134, 166], [
        f(MIX_00_4_0_3_2_1_1), f(MIX_01_4_5_3_1),
        f(MIX_10_4_7_3_2_1_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[20, 21, 52, 53], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1),
        f(MIX_10_4_7_3_2_1_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[144, 145, 176, 177], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_2_1_2_1_1),
        f(MIX_10_4_7_3_2_1_1), f(MIX_11_4_7_3_1),
    ]),
    (&[192, 193, 196, 197], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_6_3_2_1_1), f(MIX_11_4_5_3_1),
    ]),
    (&[96, 97, 100, 101], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[40, 44, 168, 172], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[9, 13, 137, 141], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[18, 50], [
        f(MIX_00_4_0_3_2_1_1), t(N_E, MIX_01_4_2_3_1, MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_7_3_2_1_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[80, 81], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_2_1_2_1_1),
        f(MIX_10_4_6_3_2_1_1), t(E_S, MIX_11_4_8_3_1, MIX_11_4_5_7_2_1_1),
    ]),
    (&[72, 76], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_1_5_2_1_1),
        t(S_W, MIX_10_4_6_3_1, MIX_10_4_7_3_2_1_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[10, 138], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_2_1_1), f(MIX_01_4_2_5_2_1_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[66], [
        f(MIX_00_4_0_3_2_1_1), f(MIX_01_4_2_5_2_1_1),
        f(MIX_10_4_6_3_2_1_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[24], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_2_1_2_1_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[7, 39, 135], [
        f(MIX_00_4_3_3_1), f(MIX_01_4_5_3_1),
        f(MIX_10_4_7_3_2_1_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[148, 149, 180], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1),
        f(MIX_10_4_7_3_2_1_1), f(MIX_11_4_7_3_1),
    ]),
    (&[224, 228, 225], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4_5_3_1),
    ]),
    (&[41, 169, 45], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[22, 54], [
        f(MIX_00_4_0_3_2_1_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_7_3_2_1_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[208, 209], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_2_1_2_1_1),
        f(MIX_10_4_6_3_2_1_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_1_1),
    ]),
    (&[104, 108], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_1_5_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_1_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[11, 139], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), f(MIX_01_4_2_5_2_1_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[19, 51], [
        t(N_E, MIX_00_4_3_3_1, MIX_00_4_1_3_5_2_1), t(N_E, MIX_01_4_2_3_1, MIX_01_4_1_5_2_3_3),
        f(MIX_10_4_7_3_2_1_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[146, 178], [
        f(MIX_00_4_0_3_2_1_1), t(N_E, MIX_01_4_2_3_1, MIX_01_4_1_5_2_3_3),
        f(MIX_10_4_7_3_2_1_1), t(N_E, MIX_11_4_7_3_1, MIX_11_4_5_7_5_2_1),
    ]),
    (&[84, 85], [
        f(MIX_00_4_3_1_2_1_1), t(E_S, MIX_01_4_1_3_1, MIX_01_4_5_1_5_2_1),
        f(MIX_10_4_6_3_2_1_1), t(E_S, MIX_11_4_8_3_1, MIX_11_4_5_7_2_3_3),
    ]),
    (&[112, 113], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_2_1_2_1_1),
        t(E_S, MIX_10_4_3_3_1, MIX_10_4_7_3_5_2_1), t(E_S, MIX_11_4_8_3_1, MIX_11_4_5_7_2_3_3),
    ]),
    (&[200, 204], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_1_5_2_1_1),
        t(S_W, MIX_10_4_6_3_1, MIX_10_4_7_3_2_3_3), t(S_W, MIX_11_4_5_3_1, MIX_11_4_7_5_5_2_1),
    ]),
    (&[73, 77], [
        t(S_W, MIX_00_4_1_3_1, MIX_00_4_3_1_5_2_1), f(MIX_01_4_1_5_2_1_1),
        t(S_W, MIX_10_4_6_3_1, MIX_10_4_7_3_2_3_3), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[42, 170], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_2_3_3), f(MIX_01_4_2_5_2_1_1),
        t(W_N, MIX_10_4_7_3_1, MIX_10_4_3_7_5_2_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[14, 142], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_2_3_3), t(W_N, MIX_01_4_5_3_1, MIX_01_4_1_5_5_2_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[67], [
        f(MIX_00_4_3_3_1), f(MIX_01_4_2_5_2_1_1),
        f(MIX_10_4_6_3_2_1_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[70], [
        f(MIX_00_4_0_3_2_1_1), f(MIX_01_4_5_3_1),
        f(MIX_10_4_6_3_2_1_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[28], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_1_3_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[152], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_2_1_2_1_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_7_3_1),
    ]),
    (&[194], [
        f(MIX_00_4_0_3_2_1_1), f(MIX_01_4_2_5_2_1_1),
        f(MIX_10_4_6_3_2_1_1), f(MIX_11_4_5_3_1),
    ]),
    (&[98], [
        f(MIX_00_4_0_3_2_1_1), f(MIX_01_4_2_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[56], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_2_1_2_1_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[25], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_2_1_2_1_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[26, 31], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[82, 214], [
        f(MIX_00_4_0_3_2_1_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_6_3_2_1_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_1_1),
    ]),
    (&[88, 248], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_2_1_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_1_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_1_1),
    ]),
    (&[74, 107], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), f(MIX_01_4_2_5_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_1_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[27], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), f(MIX_01_4_2_3_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[86], [
        f(MIX_00_4_0_3_2_1_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_6_3_2_1_1), f(MIX_11_4_8_3_1),
    ]),
    (&[216], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_2_1_2_1_1),
        f(MIX_10_4_6_3_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_1_1),
    ]),
    (&[106], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_2_5_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_1_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[30], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[210], [
        f(MIX_00_4_0_3_2_1_1), f(MIX_01_4_2_3_1),
        f(MIX_10_4_6_3_2_1_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_1_1),
    ]),
    (&[120], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_2_1_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_1_1), f(MIX_11_4_8_3_1),
    ]),
    (&[75], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), f(MIX_01_4_2_5_2_1_1),
        f(MIX_10_4_6_3_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[29], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[198], [
        f(MIX_00_4_0_3_2_1_1), f(MIX_01_4_5_3_1),
        f(MIX_10_4_6_3_2_1_1), f(MIX_11_4_5_3_1),
    ]),
    (&[184], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_2_1_2_1_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_7_3_1),
    ]),
    (&[99], [
        f(MIX_00_4_3_3_1), f(MIX_01_4_2_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[57], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_2_1_2_1_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[71], [
        f(MIX_00_4_3_3_1), f(MIX_01_4_5_3_1),
        f(MIX_10_4_6_3_2_1_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[156], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_1_3_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_7_3_1),
    ]),
    (&[226], [
        f(MIX_00_4_0_3_2_1_1), f(MIX_01_4_2_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4_5_3_1),
    ]),
    (&[60], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_1_3_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[195], [
        f(MIX_00_4_3_3_1), f(MIX_01_4_2_5_2_1_1),
        f(MIX_10_4_6_3_2_1_1), f(MIX_11_4_5_3_1),
    ]),
    (&[102], [
        f(MIX_00_4_0_3_2_1_1), f(MIX_01_4_5_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[153], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_2_1_2_1_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_7_3_1),
    ]),
    (&[58], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_6_1_1), t(N_E, MIX_01_4_2_3_1, MIX_01_4_1_5_6_1_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[83], [
        f(MIX_00_4_3_3_1), t(N_E, MIX_01_4_2_3_1, MIX_01_4_1_5_6_1_1),
        f(MIX_10_4_6_3_2_1_1), t(E_S, MIX_11_4_8_3_1, MIX_11_4_5_7_6_1_1),
    ]),
    (&[92], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_1_3_1),
        t(S_W, MIX_10_4_6_3_1, MIX_10_4_7_3_6_1_1), t(E_S, MIX_11_4_8_3_1, MIX_11_4_5_7_6_1_1),
    ]),
    (&[202], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_6_1_1), f(MIX_01_4_2_5_2_1_1),
        t(S_W, MIX_10_4_6_3_1, MIX_10_4_7_3_6_1_1), f(MIX_11_4_5_3_1),
    ]),
    (&[78], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_6_1_1), f(MIX_01_4_5_3_1),
        t(S_W, MIX_10_4_6_3_1, MIX_10_4_7_3_6_1_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[154], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_6_1_1), t(N_E, MIX_01_4_2_3_1, MIX_01_4_1_5_6_1_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_7_3_1),
    ]),
    (&[114], [
        f(MIX_00_4_0_3_2_1_1), t(N_E, MIX_01_4_2_3_1, MIX_01_4_1_5_6_1_1),
        f(MIX_10_4_3_3_1), t(E_S, MIX_11_4_8_3_1, MIX_11_4_5_7_6_1_1),
    ]),
    (&[89], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_2_1_2_1_1),
        t(S_W, MIX_10_4_6_3_1, MIX_10_4_7_3_6_1_1), t(E_S, MIX_11_4_8_3_1, MIX_11_4_5_7_6_1_1),
    ]),
    (&[90], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_6_1_1), t(N_E, MIX_01_4_2_3_1, MIX_01_4_1_5_6_1_1),
        t(S_W, MIX_10_4_6_3_1, MIX_10_4_7_3_6_1_1), t(E_S, MIX_11_4_8_3_1, MIX_11_4_5_7_6_1_1),
    ]),
    (&[55, 23], [
        t(N_E, MIX_00_4_3_3_1, MIX_00_4_1_3_5_2_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_3_3),
        f(MIX_10_4_7_3_2_1_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[182, 150], [
        f(MIX_00_4_0_3_2_1_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_3_3),
        f(MIX_10_4_7_3_2_1_1), t(N_E, MIX_11_4_7_3_1, MIX_11_4_5_7_5_2_1),
    ]),
    (&[213, 212], [
        f(MIX_00_4_3_1_2_1_1), t(E_S, MIX_01_4_1_3_1, MIX_01_4_5_1_5_2_1),
        f(MIX_10_4_6_3_2_1_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_3_3),
    ]),
    (&[241, 240], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_2_1_2_1_1),
        t(E_S, MIX_10_4_3_3_1, MIX_10_4_7_3_5_2_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_3_3),
    ]),
    (&[236, 232], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_1_5_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_3_3), t(S_W, MIX_11_4_5_3_1, MIX_11_4_7_5_5_2_1),
    ]),
    (&[109, 105], [
        t(S_W, MIX_00_4_1_3_1, MIX_00_4_3_1_5_2_1), f(MIX_01_4_1_5_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_3_3), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[171, 43], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_3_3), f(MIX_01_4_2_5_2_1_1),
        t(W_N, MIX_10_4_7_3_1, MIX_10_4_3_7_5_2_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[143, 15], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_3_3), t(W_N, MIX_01_4_5_3_1, MIX_01_4_1_5_5_2_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[124], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_1_3_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_1_1), f(MIX_11_4_8_3_1),
    ]),
    (&[203], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), f(MIX_01_4_2_5_2_1_1),
        f(MIX_10_4_6_3_1), f(MIX_11_4_5_3_1),
    ]),
    (&[62], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[211], [
        f(MIX_00_4_3_3_1), f(MIX_01_4_2_3_1),
        f(MIX_10_4_6_3_2_1_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_1_1),
    ]),
    (&[118], [
        f(MIX_00_4_0_3_2_1_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4_8_3_1),
    ]),
    (&[217], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_2_1_2_1_1),
        f(MIX_10_4_6_3_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_1_1),
    ]),
    (&[110], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_5_3_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_1_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[155], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), f(MIX_01_4_2_3_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_7_3_1),
    ]),
    (&[188], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_1_3_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_7_3_1),
    ]),
    (&[185], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_2_1_2_1_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_7_3_1),
    ]),
    (&[61], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[157], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_7_3_1),
    ]),
    (&[103], [
        f(MIX_00_4_3_3_1), f(MIX_01_4_5_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[227], [
        f(MIX_00_4_3_3_1), f(MIX_01_4_2_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4_5_3_1),
    ]),
    (&[230], [
        f(MIX_00_4_0_3_2_1_1), f(MIX_01_4_5_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4_5_3_1),
    ]),
    (&[199], [
        f(MIX_00_4_3_3_1), f(MIX_01_4_5_3_1),
        f(MIX_10_4_6_3_2_1_1), f(MIX_11_4_5_3_1),
    ]),
    (&[220], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_1_3_1),
        t(S_W, MIX_10_4_6_3_1, MIX_10_4_7_3_6_1_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_1_1),
    ]),
    (&[158], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_6_1_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_7_3_1),
    ]),
    (&[234], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_6_1_1), f(MIX_01_4_2_5_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_1_1), f(MIX_11_4_5_3_1),
    ]),
    (&[242], [
        f(MIX_00_4_0_3_2_1_1), t(N_E, MIX_01_4_2_3_1, MIX_01_4_1_5_6_1_1),
        f(MIX_10_4_3_3_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_1_1),
    ]),
    (&[59], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), t(N_E, MIX_01_4_2_3_1, MIX_01_4_1_5_6_1_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[121], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_2_1_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_1_1), t(E_S, MIX_11_4_8_3_1, MIX_11_4_5_7_6_1_1),
    ]),
    (&[87], [
        f(MIX_00_4_3_3_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_6_3_2_1_1), t(E_S, MIX_11_4_8_3_1, MIX_11_4_5_7_6_1_1),
    ]),
    (&[79], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), f(MIX_01_4_5_3_1),
        t(S_W, MIX_10_4_6_3_1, MIX_10_4_7_3_6_1_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[122], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_6_1_1), t(N_E, MIX_01_4_2_3_1, MIX_01_4_1_5_6_1_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_1_1), t(E_S, MIX_11_4_8_3_1, MIX_11_4_5_7_6_1_1),
    ]),
    (&[94], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_6_1_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_1_1),
        t(S_W, MIX_10_4_6_3_1, MIX_10_4_7_3_6_1_1), t(E_S, MIX_11_4_8_3_1, MIX_11_4_5_7_6_1_1),
    ]),
    (&[218], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_6_1_1), t(N_E, MIX_01_4_2_3_1, MIX_01_4_1_5_6_1_1),
        t(S_W, MIX_10_4_6_3_1, MIX_10_4_7_3_6_1_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_1_1),
    ]),
    (&[91], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), t(N_E, MIX_01_4_2_3_1, MIX_01_4_1_5_6_1_1),
        t(S_W, MIX_10_4_6_3_1, MIX_10_4_7_3_6_1_1), t(E_S, MIX_11_4_8_3_1, MIX_11_4_5_7_6_1_1),
    ]),
    (&[229], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4_5_3_1),
    ]),
    (&[167], [
        f(MIX_00_4_3_3_1), f(MIX_01_4_5_3_1),
        f(MIX_10_4_7_3_2_1_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[173], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[181], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1),
        f(MIX_10_4_7_3_2_1_1), f(MIX_11_4_7_3_1),
    ]),
    (&[186], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_6_1_1), t(N_E, MIX_01_4_2_3_1, MIX_01_4_1_5_6_1_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_7_3_1),
    ]),
    (&[115], [
        f(MIX_00_4_3_3_1), t(N_E, MIX_01_4_2_3_1, MIX_01_4_1_5_6_1_1),
        f(MIX_10_4_3_3_1), t(E_S, MIX_11_4_8_3_1, MIX_11_4_5_7_6_1_1),
    ]),
    (&[93], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1),
        t(S_W, MIX_10_4_6_3_1, MIX_10_4_7_3_6_1_1), t(E_S, MIX_11_4_8_3_1, MIX_11_4_5_7_6_1_1),
    ]),
    (&[206], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_6_1_1), f(MIX_01_4_5_3_1),
        t(S_W, MIX_10_4_6_3_1, MIX_10_4_7_3_6_1_1), f(MIX_11_4_5_3_1),
    ]),
    (&[205, 201], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_5_2_1_1),
        t(S_W, MIX_10_4_6_3_1, MIX_10_4_7_3_6_1_1), f(MIX_11_4_5_3_1),
    ]),
    (&[174, 46], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_6_1_1), f(MIX_01_4_5_3_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[179, 147], [
        f(MIX_00_4_3_3_1), t(N_E, MIX_01_4_2_3_1, MIX_01_4_1_5_6_1_1),
        f(MIX_10_4_7_3_2_1_1), f(MIX_11_4_7_3_1),
    ]),
    (&[117, 116], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1),
        f(MIX_10_4_3_3_1), t(E_S, MIX_11_4_8_3_1, MIX_11_4_5_7_6_1_1),
    ]),
    (&[189], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_7_3_1),
    ]),
    (&[231], [
        f(MIX_00_4_3_3_1), f(MIX_01_4_5_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4_5_3_1),
    ]),
    (&[126], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_1_1), f(MIX_11_4_8_3_1),
    ]),
    (&[219], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), f(MIX_01_4_2_3_1),
        f(MIX_10_4_6_3_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_1_1),
    ]),
    (&[125], [
        t(S_W, MIX_00_4_1_3_1, MIX_00_4_3_1_5_2_1), f(MIX_01_4_1_3_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_3_3), f(MIX_11_4_8_3_1),
    ]),
    (&[221], [
        f(MIX_00_4_1_3_1), t(E_S, MIX_01_4_1_3_1, MIX_01_4_5_1_5_2_1),
        f(MIX_10_4_6_3_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_3_3),
    ]),
    (&[207], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_3_3), t(W_N, MIX_01_4_5_3_1, MIX_01_4_1_5_5_2_1),
        f(MIX_10_4_6_3_1), f(MIX_11_4_5_3_1),
    ]),
    (&[238], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_5_3_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_3_3), t(S_W, MIX_11_4_5_3_1, MIX_11_4_7_5_5_2_1),
    ]),
    (&[190], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_3_3),
        f(MIX_10_4_7_3_1), t(N_E, MIX_11_4_7_3_1, MIX_11_4_5_7_5_2_1),
    ]),
    (&[187], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_3_3), f(MIX_01_4_2_3_1),
        t(W_N, MIX_10_4_7_3_1, MIX_10_4_3_7_5_2_1), f(MIX_11_4_7_3_1),
    ]),
    (&[243], [
        f(MIX_00_4_3_3_1), f(MIX_01_4_2_3_1),
        t(E_S, MIX_10_4_3_3_1, MIX_10_4_7_3_5_2_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_3_3),
    ]),
    (&[119], [
        t(N_E, MIX_00_4_3_3_1, MIX_00_4_1_3_5_2_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_3_3),
        f(MIX_10_4_3_3_1), f(MIX_11_4_8_3_1),
    ]),
    (&[237, 233], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_5_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_14_1_1), f(MIX_11_4_5_3_1),
    ]),
    (&[175, 47], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_14_1_1), f(MIX_01_4_5_3_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_5_7_2_1_1),
    ]),
    (&[183, 151], [
        f(MIX_00_4_3_3_1), t(N_E, MIX_01_4, MIX_01_4_1_5_14_1_1),
        f(MIX_10_4_7_3_2_1_1), f(MIX_11_4_7_3_1),
    ]),
    (&[245, 244], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1),
        f(MIX_10_4_3_3_1), t(E_S, MIX_11_4, MIX_11_4_5_7_14_1_1),
    ]),
    (&[250], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_2_3_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_1_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_1_1),
    ]),
    (&[123], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), f(MIX_01_4_2_3_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_1_1), f(MIX_11_4_8_3_1),
    ]),
    (&[95], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_6_3_1), f(MIX_11_4_8_3_1),
    ]),
    (&[222], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_6_3_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_1_1),
    ]),
    (&[252], [
        f(MIX_00_4_0_1_2_1_1), f(MIX_01_4_1_3_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_1_1), t(E_S, MIX_11_4, MIX_11_4_5_7_14_1_1),
    ]),
    (&[249], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_2_1_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_14_1_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_1_1),
    ]),
    (&[235], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), f(MIX_01_4_2_5_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_14_1_1), f(MIX_11_4_5_3_1),
    ]),
    (&[111], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_14_1_1), f(MIX_01_4_5_3_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_1_1), f(MIX_11_4_8_5_2_1_1),
    ]),
    (&[63], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_14_1_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_8_7_2_1_1),
    ]),
    (&[159], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), t(N_E, MIX_01_4, MIX_01_4_1_5_14_1_1),
        f(MIX_10_4_6_7_2_1_1), f(MIX_11_4_7_3_1),
    ]),
    (&[215], [
        f(MIX_00_4_3_3_1), t(N_E, MIX_01_4, MIX_01_4_1_5_14_1_1),
        f(MIX_10_4_6_3_2_1_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_1_1),
    ]),
    (&[246], [
        f(MIX_00_4_0_3_2_1_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), t(E_S, MIX_11_4, MIX_11_4_5_7_14_1_1),
    ]),
    (&[254], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_1_1), t(E_S, MIX_11_4, MIX_11_4_5_7_14_1_1),
    ]),
    (&[253], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_14_1_1), t(E_S, MIX_11_4, MIX_11_4_5_7_14_1_1),
    ]),
    (&[251], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), f(MIX_01_4_2_3_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_14_1_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_1_1),
    ]),
    (&[239], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_14_1_1), f(MIX_01_4_5_3_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_14_1_1), f(MIX_11_4_5_3_1),
    ]),
    (&[127], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_14_1_1), t(N_E, MIX_01_4, MIX_01_4_1_5_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_2_1_1), f(MIX_11_4_8_3_1),
    ]),
    (&[191], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_14_1_1), t(N_E, MIX_01_4, MIX_01_4_1_5_14_1_1),
        f(MIX_10_4_7_3_1), f(MIX_11_4_7_3_1),
    ]),
    (&[223], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), t(N_E, MIX_01_4, MIX_01_4_1_5_14_1_1),
        f(MIX_10_4_6_3_1), t(E_S, MIX_11_4, MIX_11_4_5_7_2_1_1),
    ]),
    (&[247], [
        f(MIX_00_4_3_3_1), t(N_E, MIX_01_4, MIX_01_4_1_5_14_1_1),
        f(MIX_10_4_3_3_1), t(E_S, MIX_11_4, MIX_11_4_5_7_14_1_1),
    ]),
    (&[255], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_14_1_1), t(N_E, MIX_01_4, MIX_01_4_1_5_14_1_1),
        t(S_W, MIX_10_4, MIX_10_4_7_3_14_1_1), t(E_S, MIX_11_4, MIX_11_4_5_7_14_1_1),
    ]),
];

#[rustfmt::skip]
pub(super) const HQ3X_CASES: &[Case<9>] = &[
    (&[0, 1, 4, 32, 128, 5, 132, 160, 33, 129, 36, 133, 164, 161, 37, 165], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[2, 34, 130, 162], [
        f(MIX_00_4_0_3_1), f(MIX_01_4), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[16, 17, 48, 49], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[64, 65, 68, 69], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4), f(MIX_22_4_8_3_1),
    ]),
    (&[8, 12, 136, 140], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[3, 35, 131, 163], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[6, 38, 134, 166], [
        f(MIX_00_4_0_3_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[20, 21, 52, 53], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[144, 145, 176, 177], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[192, 193, 196, 197], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[96, 97, 100, 101], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_3_3_1), f(MIX_21_4), f(MIX_22_4_8_3_1),
    ]),
    (&[40, 44, 168, 172], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[9, 13, 137, 141], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[18, 50], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_7_1), t(N_E, MIX_02_4_2_3_1, MIX_02_4_1_5_2_7_7),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[80, 81], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_6_3_1), t(E_S, MIX_21_4, MIX_21_4_7_7_1), t(E_S, MIX_22_4_8_3_1, MIX_22_4_5_7_2_7_7),
    ]),
    (&[72, 76], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4_6_3_1, MIX_20_4_7_3_2_7_7), t(S_W, MIX_21_4, MIX_21_4_7_7_1), f(MIX_22_4_8_3_1),
    ]),
    (&[10, 138], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_2_7_7), t(W_N, MIX_01_4, MIX_01_4_1_7_1), f(MIX_02_4_2_3_1),
        t(W_N, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[66], [
        f(MIX_00_4_0_3_1), f(MIX_01_4), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4), f(MIX_22_4_8_3_1),
    ]),
    (&[24], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[7, 39, 135], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[148, 149, 180], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[224, 228, 225], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_3_3_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[41, 169, 45], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[22, 54], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_7_1), t(N_E, MIX_02_4, MIX_02_4_1_5_2_7_7),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[208, 209], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_6_3_1), t(E_S, MIX_21_4, MIX_21_4_7_7_1), t(E_S, MIX_22_4, MIX_22_4_5_7_2_7_7),
    ]),
    (&[104, 108], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_7_7), t(S_W, MIX_21_4, MIX_21_4_7_7_1), f(MIX_22_4_8_3_1),
    ]),
    (&[11, 139], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_7_7), t(W_N, MIX_01_4, MIX_01_4_1_7_1), f(MIX_02_4_2_3_1),
        t(W_N, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[19, 51], [
        t(N_E, MIX_00_4_3_3_1, MIX_00_4_3_1_2_1_1), t(N_E, MIX_01_4, MIX_01_1_4_3_1), t(N_E, MIX_02_4_2_3_1, MIX_02_1_5_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_4_5_3_1),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[146, 178], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_3_1), t(N_E, MIX_02_4_2_3_1, MIX_02_1_5_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_5_4_3_1),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), t(N_E, MIX_22_4_7_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[84, 85], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), t(E_S, MIX_02_4_1_3_1, MIX_02_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_5_4_3_1),
        f(MIX_20_4_6_3_1), t(E_S, MIX_21_4, MIX_21_4_7_3_1), t(E_S, MIX_22_4_8_3_1, MIX_22_5_7_1_1),
    ]),
    (&[112, 113], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_4_5_3_1),
        t(E_S, MIX_20_4_3_3_1, MIX_20_4_7_3_2_1_1), t(E_S, MIX_21_4, MIX_21_7_4_3_1), t(E_S, MIX_22_4_8_3_1, MIX_22_5_7_1_1),
    ]),
    (&[200, 204], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4_6_3_1, MIX_20_7_3_1_1), t(S_W, MIX_21_4, MIX_21_7_4_3_1), t(S_W, MIX_22_4_5_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[73, 77], [
        t(S_W, MIX_00_4_1_3_1, MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        t(S_W, MIX_10_4, MIX_10_3_4_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4_6_3_1, MIX_20_7_3_1_1), t(S_W, MIX_21_4, MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[42, 170], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_3_1_1_1), t(W_N, MIX_01_4, MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        t(W_N, MIX_10_4, MIX_10_3_4_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(W_N, MIX_20_4_7_3_1, MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[14, 142], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_3_1_1_1), t(W_N, MIX_01_4, MIX_01_1_4_3_1), t(W_N, MIX_02_4_5_3_1, MIX_02_4_1_5_2_1_1),
        t(W_N, MIX_10_4, MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[67], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4), f(MIX_22_4_8_3_1),
    ]),
    (&[70], [
        f(MIX_00_4_0_3_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4), f(MIX_22_4_8_3_1),
    ]),
    (&[28], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[152], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[194], [
        f(MIX_00_4_0_3_1), f(MIX_01_4), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[98], [
        f(MIX_00_4_0_3_1), f(MIX_01_4), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_3_3_1), f(MIX_21_4), f(MIX_22_4_8_3_1),
    ]),
    (&[56], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[25], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[26, 31], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_7_7), f(MIX_01_4), t(N_E, MIX_02_4, MIX_02_4_1_5_2_7_7),
        t(W_N, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[82, 214], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_7_1), t(N_E, MIX_02_4, MIX_02_4_1_5_2_7_7),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_6_3_1), t(E_S, MIX_21_4, MIX_21_4_7_7_1), t(E_S, MIX_22_4, MIX_22_4_5_7_2_7_7),
    ]),
    (&[88, 248], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        t(S_W, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_4_5_7_1),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_7_7), f(MIX_21_4), t(E_S, MIX_22_4, MIX_22_4_5_7_2_7_7),
    ]),
    (&[74, 107], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_7_7), t(W_N, MIX_01_4, MIX_01_4_1_7_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_7_7), t(S_W, MIX_21_4, MIX_21_4_7_7_1), f(MIX_22_4_8_3_1),
    ]),
    (&[27], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_7_7), t(W_N, MIX_01_4, MIX_01_4_1_7_1), f(MIX_02_4_2_3_1),
        t(W_N, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[86], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_7_1), t(N_E, MIX_02_4, MIX_02_4_1_5_2_7_7),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4), f(MIX_22_4_8_3_1),
    ]),
    (&[216], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_6_3_1), t(E_S, MIX_21_4, MIX_21_4_7_7_1), t(E_S, MIX_22_4, MIX_22_4_5_7_2_7_7),
    ]),
    (&[106], [
        f(MIX_00_4_0_3_1), f(MIX_01_4), f(MIX_02_4_2_3_1),
        t(S_W, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_7_7), t(S_W, MIX_21_4, MIX_21_4_7_7_1), f(MIX_22_4_8_3_1),
    ]),
    (&[30], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_7_1), t(N_E, MIX_02_4, MIX_02_4_1_5_2_7_7),
        f(MIX_10_4), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[210], [
        f(MIX_00_4_0_3_1), f(MIX_01_4), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_6_3_1), t(E_S, MIX_21_4, MIX_21_4_7_7_1), t(E_S, MIX_22_4, MIX_22_4_5_7_2_7_7),
    ]),
    (&[120], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        t(S_W, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_7_7), t(S_W, MIX_21_4, MIX_21_4_7_7_1), f(MIX_22_4_8_3_1),
    ]),
    (&[75], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_7_7), t(W_N, MIX_01_4, MIX_01_4_1_7_1), f(MIX_02_4_2_3_1),
        t(W_N, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4), f(MIX_22_4_8_3_1),
    ]),
    (&[29], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[198], [
        f(MIX_00_4_0_3_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[184], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[99], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_3_3_1), f(MIX_21_4), f(MIX_22_4_8_3_1),
    ]),
    (&[57], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[71], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4), f(MIX_22_4_8_3_1),
    ]),
    (&[156], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[226], [
        f(MIX_00_4_0_3_1), f(MIX_01_4), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_3_3_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[60], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[195], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[102], [
        f(MIX_00_4_0_3_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_3_3_1), f(MIX_21_4), f(MIX_22_4_8_3_1),
    ]),
    (&[153], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[58], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_2_1_1), f(MIX_01_4), t(N_E, MIX_02_4_2_3_1, MIX_02_4_1_5_2_1_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[83], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), t(N_E, MIX_02_4_2_3_1, MIX_02_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_6_3_1), f(MIX_21_4), t(E_S, MIX_22_4_8_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[92], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        t(S_W, MIX_20_4_6_3_1, MIX_20_4_7_3_2_1_1), f(MIX_21_4), t(E_S, MIX_22_4_8_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[202], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_2_1_1), f(MIX_01_4), f(MIX_02_4_2_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4_6_3_1, MIX_20_4_7_3_2_1_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[78], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_2_1_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4_6_3_1, MIX_20_4_7_3_2_1_1), f(MIX_21_4), f(MIX_22_4_8_3_1),
    ]),
    (&[154], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_2_1_1), f(MIX_01_4), t(N_E, MIX_02_4_2_3_1, MIX_02_4_1_5_2_1_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[114], [
        f(MIX_00_4_0_3_1), f(MIX_01_4), t(N_E, MIX_02_4_2_3_1, MIX_02_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_3_3_1), f(MIX_21_4), t(E_S, MIX_22_4_8_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[89], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        t(S_W, MIX_20_4_6_3_1, MIX_20_4_7_3_2_1_1), f(MIX_21_4), t(E_S, MIX_22_4_8_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[90], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_2_1_1), f(MIX_01_4), t(N_E, MIX_02_4_2_3_1, MIX_02_4_1_5_2_1_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        t(S_W, MIX_20_4_6_3_1, MIX_20_4_7_3_2_1_1), f(MIX_21_4), t(E_S, MIX_22_4_8_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[55, 23], [
        t(N_E, MIX_00_4_3_3_1, MIX_00_4_3_1_2_1_1), t(N_E, MIX_01_4, MIX_01_1_4_3_1), t(N_E, MIX_02_4, MIX_02_1_5_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_4_5_3_1),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[182, 150], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_3_1), t(N_E, MIX_02_4, MIX_02_1_5_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_5_4_3_1),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), t(N_E, MIX_22_4_7_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[213, 212], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), t(E_S, MIX_02_4_1_3_1, MIX_02_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_5_4_3_1),
        f(MIX_20_4_6_3_1), t(E_S, MIX_21_4, MIX_21_4_7_3_1), t(E_S, MIX_22_4, MIX_22_5_7_1_1),
    ]),
    (&[241, 240], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_4_5_3_1),
        t(E_S, MIX_20_4_3_3_1, MIX_20_4_7_3_2_1_1), t(E_S, MIX_21_4, MIX_21_7_4_3_1), t(E_S, MIX_22_4, MIX_22_5_7_1_1),
    ]),
    (&[236, 232], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4, MIX_20_7_3_1_1), t(S_W, MIX_21_4, MIX_21_7_4_3_1), t(S_W, MIX_22_4_5_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[109, 105], [
        t(S_W, MIX_00_4_1_3_1, MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        t(S_W, MIX_10_4, MIX_10_3_4_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4, MIX_20_7_3_1_1), t(S_W, MIX_21_4, MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[171, 43], [
        t(W_N, MIX_00_4, MIX_00_3_1_1_1), t(W_N, MIX_01_4, MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        t(W_N, MIX_10_4, MIX_10_3_4_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(W_N, MIX_20_4_7_3_1, MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[143, 15], [
        t(W_N, MIX_00_4, MIX_00_3_1_1_1), t(W_N, MIX_01_4, MIX_01_1_4_3_1), t(W_N, MIX_02_4_5_3_1, MIX_02_4_1_5_2_1_1),
        t(W_N, MIX_10_4, MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[124], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        t(S_W, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_7_7), t(S_W, MIX_21_4, MIX_21_4_7_7_1), f(MIX_22_4_8_3_1),
    ]),
    (&[203], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_7_7), t(W_N, MIX_01_4, MIX_01_4_1_7_1), f(MIX_02_4_2_3_1),
        t(W_N, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[62], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_7_1), t(N_E, MIX_02_4, MIX_02_4_1_5_2_7_7),
        f(MIX_10_4), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[211], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_6_3_1), t(E_S, MIX_21_4, MIX_21_4_7_7_1), t(E_S, MIX_22_4, MIX_22_4_5_7_2_7_7),
    ]),
    (&[118], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_7_1), t(N_E, MIX_02_4, MIX_02_4_1_5_2_7_7),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_3_3_1), f(MIX_21_4), f(MIX_22_4_8_3_1),
    ]),
    (&[217], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_6_3_1), t(E_S, MIX_21_4, MIX_21_4_7_7_1), t(E_S, MIX_22_4, MIX_22_4_5_7_2_7_7),
    ]),
    (&[110], [
        f(MIX_00_4_0_3_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        t(S_W, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_7_7), t(S_W, MIX_21_4, MIX_21_4_7_7_1), f(MIX_22_4_8_3_1),
    ]),
    (&[155], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_7_7), t(W_N, MIX_01_4, MIX_01_4_1_7_1), f(MIX_02_4_2_3_1),
        t(W_N, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[188], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[185], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[61], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[157], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[103], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_3_3_1), f(MIX_21_4), f(MIX_22_4_8_3_1),
    ]),
    (&[227], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_3_3_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[230], [
        f(MIX_00_4_0_3_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_3_3_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[199], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[220], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        f(MIX_10_4), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_4_5_7_1),
        t(S_W, MIX_20_4_6_3_1, MIX_20_4_7_3_2_1_1), t(E_S, MIX_21_4, MIX_21_4_7_7_1), t(E_S, MIX_22_4, MIX_22_4_5_7_2_7_7),
    ]),
    (&[158], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_2_1_1), t(N_E, MIX_01_4, MIX_01_4_1_7_1), t(N_E, MIX_02_4, MIX_02_4_1_5_2_7_7),
        f(MIX_10_4), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[234], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_2_1_1), f(MIX_01_4), f(MIX_02_4_2_3_1),
        t(S_W, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_7_7), t(S_W, MIX_21_4, MIX_21_4_7_7_1), f(MIX_22_4_5_3_1),
    ]),
    (&[242], [
        f(MIX_00_4_0_3_1), f(MIX_01_4), t(N_E, MIX_02_4_2_3_1, MIX_02_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_3_3_1), t(E_S, MIX_21_4, MIX_21_4_7_7_1), t(E_S, MIX_22_4, MIX_22_4_5_7_2_7_7),
    ]),
    (&[59], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_7_7), t(W_N, MIX_01_4, MIX_01_4_1_7_1), t(N_E, MIX_02_4_2_3_1, MIX_02_4_1_5_2_1_1),
        t(W_N, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[121], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        t(S_W, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_7_7), t(S_W, MIX_21_4, MIX_21_4_7_7_1), t(E_S, MIX_22_4_8_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[87], [
        f(MIX_00_4_3_3_1), t(N_E, MIX_01_4, MIX_01_4_1_7_1), t(N_E, MIX_02_4, MIX_02_4_1_5_2_7_7),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4), t(E_S, MIX_22_4_8_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[79], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_7_7), t(W_N, MIX_01_4, MIX_01_4_1_7_1), f(MIX_02_4_5_3_1),
        t(W_N, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4_6_3_1, MIX_20_4_7_3_2_1_1), f(MIX_21_4), f(MIX_22_4_8_3_1),
    ]),
    (&[122], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_2_1_1), f(MIX_01_4), t(N_E, MIX_02_4_2_3_1, MIX_02_4_1_5_2_1_1),
        t(S_W, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_7_7), t(S_W, MIX_21_4, MIX_21_4_7_7_1), t(E_S, MIX_22_4_8_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[94], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_2_1_1), t(N_E, MIX_01_4, MIX_01_4_1_7_1), t(N_E, MIX_02_4, MIX_02_4_1_5_2_7_7),
        f(MIX_10_4), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_4_5_7_1),
        t(S_W, MIX_20_4_6_3_1, MIX_20_4_7_3_2_1_1), f(MIX_21_4), t(E_S, MIX_22_4_8_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[218], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_2_1_1), f(MIX_01_4), t(N_E, MIX_02_4_2_3_1, MIX_02_4_1_5_2_1_1),
        f(MIX_10_4), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_4_5_7_1),
        t(S_W, MIX_20_4_6_3_1, MIX_20_4_7_3_2_1_1), t(E_S, MIX_21_4, MIX_21_4_7_7_1), t(E_S, MIX_22_4, MIX_22_4_5_7_2_7_7),
    ]),
    (&[91], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_7_7), t(W_N, MIX_01_4, MIX_01_4_1_7_1), t(N_E, MIX_02_4_2_3_1, MIX_02_4_1_5_2_1_1),
        t(W_N, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4),
        t(S_W, MIX_20_4_6_3_1, MIX_20_4_7_3_2_1_1), f(MIX_21_4), t(E_S, MIX_22_4_8_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[229], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_3_3_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[167], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[173], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[181], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[186], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_2_1_1), f(MIX_01_4), t(N_E, MIX_02_4_2_3_1, MIX_02_4_1_5_2_1_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[115], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), t(N_E, MIX_02_4_2_3_1, MIX_02_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_3_3_1), f(MIX_21_4), t(E_S, MIX_22_4_8_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[93], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        t(S_W, MIX_20_4_6_3_1, MIX_20_4_7_3_2_1_1), f(MIX_21_4), t(E_S, MIX_22_4_8_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[206], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_2_1_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4_6_3_1, MIX_20_4_7_3_2_1_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[205, 201], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4_6_3_1, MIX_20_4_7_3_2_1_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[174, 46], [
        t(W_N, MIX_00_4_0_3_1, MIX_00_4_3_1_2_1_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[179, 147], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), t(N_E, MIX_02_4_2_3_1, MIX_02_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[117, 116], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_3_3_1), f(MIX_21_4), t(E_S, MIX_22_4_8_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[189], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[231], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_3_3_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[126], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_7_1), t(N_E, MIX_02_4, MIX_02_4_1_5_2_7_7),
        t(S_W, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_4_5_7_1),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_7_7), t(S_W, MIX_21_4, MIX_21_4_7_7_1), f(MIX_22_4_8_3_1),
    ]),
    (&[219], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_7_7), t(W_N, MIX_01_4, MIX_01_4_1_7_1), f(MIX_02_4_2_3_1),
        t(W_N, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_6_3_1), t(E_S, MIX_21_4, MIX_21_4_7_7_1), t(E_S, MIX_22_4, MIX_22_4_5_7_2_7_7),
    ]),
    (&[125], [
        t(S_W, MIX_00_4_1_3_1, MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        t(S_W, MIX_10_4, MIX_10_3_4_3_1), f(MIX_11_4), f(MIX_12_4),
        t(S_W, MIX_20_4, MIX_20_7_3_1_1), t(S_W, MIX_21_4, MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[221], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), t(E_S, MIX_02_4_1_3_1, MIX_02_4_1_5_2_1_1),
        f(MIX_10_4), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_5_4_3_1),
        f(MIX_20_4_6_3_1), t(E_S, MIX_21_4, MIX_21_4_7_3_1), t(E_S, MIX_22_4, MIX_22_5_7_1_1),
    ]),
    (&[207], [
        t(W_N, MIX_00_4, MIX_00_3_1_1_1), t(W_N, MIX_01_4, MIX_01_1_4_3_1), t(W_N, MIX_02_4_5_3_1, MIX_02_4_1_5_2_1_1),
        t(W_N, MIX_10_4, MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[238], [
        f(MIX_00_4_0_3_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        t(S_W, MIX_10_4, MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4, MIX_20_7_3_1_1), t(S_W, MIX_21_4, MIX_21_7_4_3_1), t(S_W, MIX_22_4_5_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[190], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_3_1), t(N_E, MIX_02_4, MIX_02_1_5_1_1),
        f(MIX_10_4), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_5_4_3_1),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), t(N_E, MIX_22_4_7_3_1, MIX_22_4_5_7_2_1_1),
    ]),
    (&[187], [
        t(W_N, MIX_00_4, MIX_00_3_1_1_1), t(W_N, MIX_01_4, MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        t(W_N, MIX_10_4, MIX_10_3_4_3_1), f(MIX_11_4), f(MIX_12_4),
        t(W_N, MIX_20_4_7_3_1, MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[243], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), f(MIX_02_4_2_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_4_5_3_1),
        t(E_S, MIX_20_4_3_3_1, MIX_20_4_7_3_2_1_1), t(E_S, MIX_21_4, MIX_21_7_4_3_1), t(E_S, MIX_22_4, MIX_22_5_7_1_1),
    ]),
    (&[119], [
        t(N_E, MIX_00_4_3_3_1, MIX_00_4_3_1_2_1_1), t(N_E, MIX_01_4, MIX_01_1_4_3_1), t(N_E, MIX_02_4, MIX_02_1_5_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_4_5_3_1),
        f(MIX_20_4_3_3_1), f(MIX_21_4), f(MIX_22_4_8_3_1),
    ]),
    (&[237, 233], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_5_2_1_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_1_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[175, 47], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4_5_3_1),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_5_7_2_1_1),
    ]),
    (&[183, 151], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), t(N_E, MIX_02_4, MIX_02_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_2_1_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[245, 244], [
        f(MIX_00_4_3_1_2_1_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_3_3_1), f(MIX_21_4), t(E_S, MIX_22_4, MIX_22_4_5_7_2_1_1),
    ]),
    (&[250], [
        f(MIX_00_4_0_3_1), f(MIX_01_4), f(MIX_02_4_2_3_1),
        t(S_W, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_4_5_7_1),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_7_7), f(MIX_21_4), t(E_S, MIX_22_4, MIX_22_4_5_7_2_7_7),
    ]),
    (&[123], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_7_7), t(W_N, MIX_01_4, MIX_01_4_1_7_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_7_7), t(S_W, MIX_21_4, MIX_21_4_7_7_1), f(MIX_22_4_8_3_1),
    ]),
    (&[95], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_7_7), f(MIX_01_4), t(N_E, MIX_02_4, MIX_02_4_1_5_2_7_7),
        t(W_N, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_6_3_1), f(MIX_21_4), f(MIX_22_4_8_3_1),
    ]),
    (&[222], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_7_1), t(N_E, MIX_02_4, MIX_02_4_1_5_2_7_7),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_6_3_1), t(E_S, MIX_21_4, MIX_21_4_7_7_1), t(E_S, MIX_22_4, MIX_22_4_5_7_2_7_7),
    ]),
    (&[252], [
        f(MIX_00_4_0_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        t(S_W, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_7_7), f(MIX_21_4), t(E_S, MIX_22_4, MIX_22_4_5_7_2_1_1),
    ]),
    (&[249], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_4_5_7_1),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_1_1), f(MIX_21_4), t(E_S, MIX_22_4, MIX_22_4_5_7_2_7_7),
    ]),
    (&[235], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_7_7), t(W_N, MIX_01_4, MIX_01_4_1_7_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_1_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[111], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_7_7), t(S_W, MIX_21_4, MIX_21_4_7_7_1), f(MIX_22_4_8_3_1),
    ]),
    (&[63], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), f(MIX_01_4), t(N_E, MIX_02_4, MIX_02_4_1_5_2_7_7),
        f(MIX_10_4), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_4_5_7_1),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_8_3_1),
    ]),
    (&[159], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_7_7), f(MIX_01_4), t(N_E, MIX_02_4, MIX_02_4_1_5_2_1_1),
        t(W_N, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_6_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[215], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), t(N_E, MIX_02_4, MIX_02_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_6_3_1), t(E_S, MIX_21_4, MIX_21_4_7_7_1), t(E_S, MIX_22_4, MIX_22_4_5_7_2_7_7),
    ]),
    (&[246], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_7_1), t(N_E, MIX_02_4, MIX_02_4_1_5_2_7_7),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_3_3_1), f(MIX_21_4), t(E_S, MIX_22_4, MIX_22_4_5_7_2_1_1),
    ]),
    (&[254], [
        f(MIX_00_4_0_3_1), t(N_E, MIX_01_4, MIX_01_4_1_7_1), t(N_E, MIX_02_4, MIX_02_4_1_5_2_7_7),
        t(S_W, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_7_7), f(MIX_21_4), t(E_S, MIX_22_4, MIX_22_4_5_7_2_1_1),
    ]),
    (&[253], [
        f(MIX_00_4_1_3_1), f(MIX_01_4_1_3_1), f(MIX_02_4_1_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_1_1), f(MIX_21_4), t(E_S, MIX_22_4, MIX_22_4_5_7_2_1_1),
    ]),
    (&[251], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_7_7), t(W_N, MIX_01_4, MIX_01_4_1_7_1), f(MIX_02_4_2_3_1),
        f(MIX_10_4), f(MIX_11_4), t(E_S, MIX_12_4, MIX_12_4_5_7_1),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_1_1), f(MIX_21_4), t(E_S, MIX_22_4, MIX_22_4_5_7_2_7_7),
    ]),
    (&[239], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), f(MIX_01_4), f(MIX_02_4_5_3_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4_5_3_1),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_1_1), f(MIX_21_4), f(MIX_22_4_5_3_1),
    ]),
    (&[127], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), f(MIX_01_4), t(N_E, MIX_02_4, MIX_02_4_1_5_2_7_7),
        f(MIX_10_4), f(MIX_11_4), t(N_E, MIX_12_4, MIX_12_4_5_7_1),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_7_7), t(S_W, MIX_21_4, MIX_21_4_7_7_1), f(MIX_22_4_8_3_1),
    ]),
    (&[191], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), f(MIX_01_4), t(N_E, MIX_02_4, MIX_02_4_1_5_2_1_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_7_3_1), f(MIX_21_4_7_3_1), f(MIX_22_4_7_3_1),
    ]),
    (&[223], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_7_7), f(MIX_01_4), t(N_E, MIX_02_4, MIX_02_4_1_5_2_1_1),
        t(W_N, MIX_10_4, MIX_10_4_3_7_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_6_3_1), t(E_S, MIX_21_4, MIX_21_4_7_7_1), t(E_S, MIX_22_4, MIX_22_4_5_7_2_7_7),
    ]),
    (&[247], [
        f(MIX_00_4_3_3_1), f(MIX_01_4), t(N_E, MIX_02_4, MIX_02_4_1_5_2_1_1),
        f(MIX_10_4_3_3_1), f(MIX_11_4), f(MIX_12_4),
        f(MIX_20_4_3_3_1), f(MIX_21_4), t(E_S, MIX_22_4, MIX_22_4_5_7_2_1_1),
    ]),
    (&[255], [
        t(W_N, MIX_00_4, MIX_00_4_3_1_2_1_1), f(MIX_01_4), t(N_E, MIX_02_4, MIX_02_4_1_5_2_1_1),
        f(MIX_10_4), f(MIX_11_4), f(MIX_12_4),
        t(S_W, MIX_20_4, MIX_20_4_7_3_2_1_1), f(MIX_21_4), t(E_S, MIX_22_4, MIX_22_4_5_7_2_1_1),
    ]),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn coverage<const N: usize>(cases: &[Case<N>]) -> [u32; 256] {
        let mut seen = [0; 256];
        for (patterns, _) in cases {
            for &p in patterns.iter() {
                seen[p as usize] += 1;
            }
        }
        seen
    }

    #[test]
    fn test_every_pattern_listed_once() {
        assert!(coverage(HQ2X_CASES).iter().all(|&n| n == 1));
        assert!(coverage(HQ3X_CASES).iter().all(|&n| n == 1));
    }

    #[test]
    fn test_case_counts() {
        assert_eq!(HQ2X_CASES.len(), 161);
        assert_eq!(HQ3X_CASES.len(), 161);
    }

    #[test]
    fn test_hq3x_centre_is_never_blended() {
        for (_, slots) in HQ3X_CASES {
            assert_eq!(slots[4], f(MIX_11_4));
        }
    }

    #[test]
    fn test_comparisons_are_orthogonal_pairs() {
        let slots = HQ2X_CASES.iter().flat_map(|c| c.1).chain(HQ3X_CASES.iter().flat_map(|c| c.1));
        for slot in slots {
            if let Some(pair) = slot.test {
                assert!([W_N, N_E, E_S, S_W].contains(&pair), "{:?}", pair);
            }
        }
    }
}
