use blueprint::{BlueprintCache, Composition, DURATION_FPS, duration_in_frames, resolve_clip_at};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let s = include_str!("../tests/data/editor_timeline.json");
    let comp = Composition::from_json_str(s)?;
    let frames = duration_in_frames(&comp);
    println!("{frames} frames at {} fps", DURATION_FPS.as_f64());

    let mut cache = BlueprintCache::default();
    for f in [0u64, 15, 90, 135, 239] {
        let t = f as f64 / DURATION_FPS.as_f64();
        for clip in comp
            .clips()
            .filter(|c| c.start_time_in_seconds <= t && t < c.end_time_in_seconds)
        {
            let root = resolve_clip_at(&mut cache, clip, t)?;
            println!("frame {f} clip {}: {}", clip.id, serde_json::to_string(&root)?);
        }
    }

    let stats = cache.stats();
    println!("cache: {} hits, {} misses", stats.hits, stats.misses);
    Ok(())
}
