use criterion::{Criterion, criterion_group, criterion_main};
use replymark_engine::render_markdown;
use std::hint::black_box;

// Shaped like a typical assistant reply: sections, emphasis, a table, lists.
const SAMPLE: &str = "## Assessment\nYour match rate is **82%**, which is *above* the median.\n\n|Skill|Status|Weeks|\n|-|-|-|\n|Rust|strong|0|\n|Kafka|missing|4|\n|SQL|basic|2|\n\n## Plan\n1. Close the `Kafka` gap first\n2. Deepen **SQL** with window functions\n- Practice with real datasets\n---\n> Start today: set up a local broker.";

fn bench_render(c: &mut Criterion) {
    c.bench_function("render_reply", |b| {
        b.iter(|| render_markdown(black_box(SAMPLE)))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
