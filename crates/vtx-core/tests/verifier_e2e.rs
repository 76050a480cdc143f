// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! End-to-end verification against proofs from an independent prover
//! (arkworks Groth16 over BN254, seven public inputs).

use ark_bn254::{Fq, Fq2, Fr, G2Affine};
use ark_ff::Field;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use std::path::Path;
use std::sync::Arc;
use vtx_core::vtx_types::wire::{encode_inputs, WireG2};
use vtx_core::vtx_types::{Error, Fp, Group, PointFault, Proof, PublicInputs, WireProof};
use vtx_core::{verify_groth16, verify_tx, Rejection, Verdict, Verifier};
use vtx_sdk::serialize::{inputs_from_ark, proof_from_ark, vk_from_ark};

const RECORD: [u64; 7] = [1, 2, 3, 1, 2, 3, 1];

struct Scenario {
    verifier: Verifier,
    ark_vk: ark_groth16::VerifyingKey<ark_bn254::Bn254>,
    ark_proof: ark_groth16::Proof<ark_bn254::Bn254>,
    proof: Proof,
    inputs: PublicInputs,
}

fn fr(values: &[u64]) -> Vec<Fr> {
    values.iter().map(|&v| Fr::from(v)).collect()
}

fn scenario(seed: u64) -> Scenario {
    let mut rng = StdRng::seed_from_u64(seed);
    let values = fr(&RECORD);
    let (pk, ark_vk) = vtx_circuit::setup(values.len(), &mut rng).unwrap();
    let ark_proof = vtx_circuit::prove(&pk, &values, &mut rng).unwrap();
    Scenario {
        verifier: Verifier::new(Arc::new(vk_from_ark(&ark_vk).unwrap())),
        proof: proof_from_ark(&ark_proof).unwrap(),
        inputs: inputs_from_ark(&values),
        ark_vk,
        ark_proof,
    }
}

fn off_subgroup_g2() -> G2Affine {
    (1u64..)
        .filter_map(|k| G2Affine::get_point_from_x_unchecked(Fq2::new(Fq::from(k), Fq::ONE), false))
        .find(|p| !p.is_in_correct_subgroup_assuming_on_curve())
        .unwrap()
}

fn wire_g2(p: &G2Affine) -> WireG2 {
    let enc = |v: Fq| Fp::from_inner(v).to_hex();
    [[enc(p.x.c0), enc(p.x.c1)], [enc(p.y.c0), enc(p.y.c1)]]
}

// ── honest proofs ──

#[test]
fn honest_proof_accepted() {
    let s = scenario(1);
    assert_eq!(s.verifier.verify(&s.proof, &s.inputs), Verdict::Accepted);
    assert_eq!(
        verify_groth16(s.verifier.vk(), &s.proof, &s.inputs),
        Verdict::Accepted
    );
    assert!(vtx_circuit::verify_offchain(&s.ark_vk, &s.ark_proof, &fr(&RECORD)));
}

#[test]
fn verify_tx_true_for_honest_wire_proof() {
    let s = scenario(2);
    let wire = WireProof::from(&s.proof);
    let inputs = encode_inputs(&s.inputs);
    assert!(verify_tx(&s.verifier, &wire, &inputs));
}

// ── tampering ──

#[test]
fn first_input_changed_is_false() {
    let s = scenario(3);
    let wire = WireProof::from(&s.proof);
    let mut inputs = encode_inputs(&s.inputs);
    inputs[0] = format!("0x{:064x}", 2);
    assert!(!verify_tx(&s.verifier, &wire, &inputs));
    assert_eq!(
        s.verifier.verify_wire(&wire, &inputs),
        Verdict::Rejected(Rejection::PairingCheckFailed)
    );
    let mut values = fr(&RECORD);
    values[0] = Fr::from(2u64);
    assert!(!vtx_circuit::verify_offchain(&s.ark_vk, &s.ark_proof, &values));
}

#[test]
fn flipped_bit_in_a_is_invalid_proof() {
    let s = scenario(4);
    let mut wire = WireProof::from(&s.proof);
    let mut x = Fp::from_hex(&wire.a[0]).unwrap().to_bytes();
    x[31] ^= 1;
    wire.a[0] = format!("0x{}", hex::encode(x));
    let verdict = s.verifier.verify_wire(&wire, &encode_inputs(&s.inputs));
    assert!(matches!(
        verdict,
        Verdict::Rejected(Rejection::InvalidProof(Error::InvalidPoint {
            group: Group::G1,
            ..
        })) | Verdict::Rejected(Rejection::InvalidProof(Error::OutOfRange))
    ));
}

#[test]
fn swapped_proof_points_rejected() {
    let s = scenario(5);
    let swapped = Proof::new(s.proof.c, s.proof.b, s.proof.a);
    assert_eq!(
        s.verifier.verify(&swapped, &s.inputs),
        Verdict::Rejected(Rejection::PairingCheckFailed)
    );
}

#[test]
fn wrong_input_length_is_rejected_without_panic() {
    let s = scenario(6);
    let short = PublicInputs::from_u64s(&RECORD[..6]);
    assert_eq!(
        s.verifier.verify(&s.proof, &short),
        Verdict::Rejected(Rejection::InputLengthMismatch {
            expected: 7,
            actual: 6
        })
    );
    let long = PublicInputs::from_u64s(&[1, 2, 3, 1, 2, 3, 1, 0]);
    assert!(!s.verifier.verify(&s.proof, &long).is_accepted());
}

#[test]
fn off_subgroup_b_is_invalid_proof() {
    let s = scenario(7);
    let mut wire = WireProof::from(&s.proof);
    wire.b = wire_g2(&off_subgroup_g2());
    assert_eq!(
        s.verifier.verify_wire(&wire, &encode_inputs(&s.inputs)),
        Verdict::Rejected(Rejection::InvalidProof(Error::InvalidPoint {
            group: Group::G2,
            fault: PointFault::NotInSubgroup
        }))
    );
}

#[test]
fn short_width_inputs_are_invalid_input() {
    let s = scenario(13);
    let wire = WireProof::from(&s.proof);
    let short: Vec<String> = RECORD.iter().map(|v| format!("0x{v}")).collect();
    assert!(matches!(
        s.verifier.verify_wire(&wire, &short),
        Verdict::Rejected(Rejection::InvalidInput(Error::Decode(_)))
    ));
    assert!(!verify_tx(&s.verifier, &wire, &short));
    assert!(verify_tx(&s.verifier, &wire, &encode_inputs(&s.inputs)));
}

#[test]
fn input_at_modulus_is_invalid_input() {
    let s = scenario(8);
    let mut inputs = encode_inputs(&s.inputs);
    // r, the scalar field modulus
    inputs[3] = "0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001".into();
    assert_eq!(
        s.verifier.verify_wire(&WireProof::from(&s.proof), &inputs),
        Verdict::Rejected(Rejection::InvalidInput(Error::OutOfRange))
    );
}

// ── determinism and sharing ──

#[test]
fn verification_is_idempotent() {
    let s = scenario(9);
    let first = s.verifier.verify(&s.proof, &s.inputs);
    for _ in 0..3 {
        assert_eq!(s.verifier.verify(&s.proof, &s.inputs), first);
    }
}

#[test]
fn batch_matches_individual_results() {
    let s = scenario(10);
    let other = PublicInputs::from_u64s(&[2, 2, 3, 1, 2, 3, 1]);
    let short = PublicInputs::from_u64s(&[1]);
    let items = [(&s.proof, &s.inputs), (&s.proof, &other), (&s.proof, &short)];
    let batch = s.verifier.verify_batch(items);
    let single: Vec<_> = items
        .iter()
        .map(|(p, i)| s.verifier.verify(p, i))
        .collect();
    assert_eq!(batch, single);
    assert_eq!(
        batch.iter().map(Verdict::is_accepted).collect::<Vec<_>>(),
        [true, false, false]
    );
}

#[test]
fn shared_verifier_across_threads() {
    let s = scenario(11);
    let other = PublicInputs::from_u64s(&[1, 2, 3, 1, 2, 3, 2]);
    let verifier = Arc::new(s.verifier);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let verifier = Arc::clone(&verifier);
                let inputs = if i % 2 == 0 { &s.inputs } else { &other };
                let proof = &s.proof;
                scope.spawn(move || verifier.verify(proof, inputs).is_accepted())
            })
            .collect();
        let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, [true, false, true, false]);
    });
}

// ── observed fixture ──

#[test]
fn observed_fixture_against_unrelated_key_is_rejected() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/observed_proof.json");
    let file = vtx_sdk::prooffile::load_proof(&path).unwrap();
    let s = scenario(12);
    assert_eq!(
        s.verifier.verify_wire(&file.proof, &file.inputs),
        Verdict::Rejected(Rejection::PairingCheckFailed)
    );
    assert!(!verify_tx(&s.verifier, &file.proof, &file.inputs));
}
