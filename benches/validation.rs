//! Benchmarks for marker validation.
//!
//! Measures the driver over synthetic assemblies:
//! - Discovery and dispatch on a single heavily decorated member
//! - A full assembly pass including the cross-member phase
//! - The same pass with the cross-member phase disabled

extern crate attrscope;

use attrscope::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

#[derive(Debug)]
struct Checked;

impl Marker for Checked {
    fn validate(&self, target: &dyn Target) -> Result<()> {
        black_box(target.name());
        Ok(())
    }

    fn validate_members(&self, pairs: &[MemberMarkerPair<'_>]) -> Result<()> {
        black_box(pairs.len());
        Ok(())
    }
}

impl MarkerType for Checked {
    const NAME: &'static str = "Checked";

    fn instantiate(_value: &CustomAttributeValue) -> Result<Self> {
        Ok(Checked)
    }
}

#[derive(Debug)]
struct Label(String);

impl Marker for Label {
    fn validate(&self, _target: &dyn Target) -> Result<()> {
        black_box(&self.0);
        Ok(())
    }

    fn validate_multiple(&self, _target: &dyn Target, group: &[MarkerRc]) -> Result<()> {
        black_box(group.len());
        Ok(())
    }
}

impl MarkerType for Label {
    const NAME: &'static str = "Label";
    const ALLOW_MULTIPLE: bool = true;

    fn instantiate(value: &CustomAttributeValue) -> Result<Self> {
        Ok(Label(value.fixed_arg(0)?.as_str()?.to_string()))
    }
}

fn label(text: &str) -> CustomAttribute {
    CustomAttribute::new("Label").with_fixed_arg(CustomAttributeArgument::String(text.to_string()))
}

fn registry() -> MarkerRegistry {
    MarkerRegistry::builder()
        .marker::<Checked>()
        .marker::<Label>()
        .build()
        .unwrap()
}

/// Builds an assembly with `types` types of `members` decorated members each
fn synthetic_assembly(types: u32, members: u32) -> Assembly {
    let assembly = Assembly::new("Synthetic").with_attribute(CustomAttribute::new("Checked"));

    let mut member_row = 1;
    for type_row in 1..=types {
        let ty = TypeDef::with_row(type_row, "Synthetic", format!("Type{type_row}"))
            .with_attribute(CustomAttribute::new("Checked"))
            .with_attribute(CustomAttribute::new("Serializable"));

        for index in 0..members {
            let member = Member::field(member_row, format!("field{index}"))
                .with_attribute(CustomAttribute::new("Checked"))
                .with_attribute(label("a"))
                .with_attribute(label("b"));
            ty.add_member(member);
            member_row += 1;
        }

        assembly.add_type(ty);
    }

    assembly
}

/// Benchmark validating one member carrying many markers.
fn bench_validate_target(c: &mut Criterion) {
    let registry = registry();
    let validator = MarkerValidator::new(&registry);

    let member = (0..16).fold(
        Member::property(1, "Decorated").with_attribute(CustomAttribute::new("Checked")),
        |member, index| member.with_attribute(label(&format!("l{index}"))),
    );

    c.bench_function("validate_target_17_markers", |b| {
        b.iter(|| validator.validate_target(black_box(&member)).unwrap());
    });
}

/// Benchmark a full assembly pass.
fn bench_validate_assembly(c: &mut Criterion) {
    let registry = registry();
    let validator = MarkerValidator::new(&registry);
    let assembly = synthetic_assembly(50, 20);

    c.bench_function("validate_assembly_50x20", |b| {
        b.iter(|| validator.validate_assembly(black_box(&assembly)).unwrap());
    });
}

/// Benchmark a full assembly pass without the cross-member phase.
fn bench_validate_assembly_minimal(c: &mut Criterion) {
    let registry = registry();
    let validator = MarkerValidator::with_config(&registry, ValidationConfig::minimal());
    let assembly = synthetic_assembly(50, 20);

    c.bench_function("validate_assembly_50x20_minimal", |b| {
        b.iter(|| validator.validate_assembly(black_box(&assembly)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_validate_target,
    bench_validate_assembly,
    bench_validate_assembly_minimal
);
criterion_main!(benches);
