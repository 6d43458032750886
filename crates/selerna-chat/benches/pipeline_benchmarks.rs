//! Benchmarks for the synchronous stages of the reply pipeline.
//!
//! Intent classification and lip-sync generation run on every request, so
//! both should stay well under a millisecond for realistic chat messages.

use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use selerna_chat::expression::select_expression;
use selerna_chat::lipsync::{lipsync_for, synthesize_cues};
use selerna_chat::router::IntentRouter;

const MESSAGES: &[&str] = &[
    "What services do you offer?",
    "Who is Steve Sellars?",
    "Can I book a discovery call next week?",
    "How much does the Blueprint cost?",
    "Do you work with healthcare or maritime companies?",
    "Tell me something interesting about penguins",
];

const LONG_REPLY: &str = "Our AI Strategy Blueprint moves from Discovery Scan to \
    Opportunity Architecture to a clear Transformation Pathway. We start by \
    mapping quick wins, then align leaders on priorities, and finally build \
    the roadmap your teams can actually execute. Would a quick example of \
    those stages help?";

fn bench_classify(c: &mut Criterion) {
    let router = IntentRouter::brand();

    let mut group = c.benchmark_group("intent_routing");
    group.sample_size(200);
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("classify_mixed", |b| {
        let mut idx = 0usize;
        b.iter(|| {
            let intent = router.classify(MESSAGES[idx % MESSAGES.len()]);
            idx += 1;
            intent
        });
    });

    // Worst case: every rule is evaluated before falling back.
    group.bench_function("classify_fallback", |b| {
        b.iter(|| router.classify("Tell me something interesting about penguins"));
    });

    group.finish();
}

fn bench_lipsync(c: &mut Criterion) {
    let mut group = c.benchmark_group("lipsync");
    group.sample_size(200);

    group.bench_function("cues_long_reply", |b| {
        b.iter(|| synthesize_cues(LONG_REPLY, 12_000));
    });

    group.bench_function("lipsync_and_expression", |b| {
        b.iter(|| {
            let lipsync = lipsync_for(LONG_REPLY);
            let expression = select_expression(&LONG_REPLY.to_lowercase());
            (lipsync, expression)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_lipsync);
criterion_main!(benches);
