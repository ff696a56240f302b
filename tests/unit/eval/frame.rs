use super::*;
use crate::blueprint::cache::BlueprintCache;

fn clip(element: &[&str]) -> Clip {
    Clip {
        id: "c0".to_owned(),
        start_time_in_seconds: 0.0,
        end_time_in_seconds: 2.0,
        element: element.iter().map(|s| (*s).to_owned()).collect(),
        transition_to_next: None,
        transition_from_previous: None,
    }
}

fn first_child(e: &ResolvedElement) -> &ResolvedElement {
    e.children
        .iter()
        .find_map(|c| match c {
            ResolvedChild::Element(e) => Some(e),
            ResolvedChild::Text(_) => None,
        })
        .unwrap()
}

#[test]
fn resolves_and_routes_props() {
    let mut cache = BlueprintCache::default();
    let c = clip(&["div;id:box;className:card;opacity:@animate[0,2]:[0,1];text:hi"]);

    let root = resolve_clip_at(&mut cache, &c, 1.0).unwrap();
    assert_eq!(root.name, "AbsoluteFill");
    assert_eq!(root.kind, ComponentKind::Component);

    let div = first_child(&root);
    assert_eq!(div.kind, ComponentKind::Html);
    assert_eq!(
        div.component_props["className"],
        ResolvedProp::Value(Scalar::from("card"))
    );
    assert_eq!(div.style_props["opacity"], ResolvedProp::Value(Scalar::Number(0.5)));
    assert!(!div.style_props.contains_key("text"));
    assert!(!div.component_props.contains_key("text"));
    assert_eq!(div.children, vec![ResolvedChild::Text("hi".to_owned())]);
}

#[test]
fn unknown_components_receive_text_as_prop() {
    let mut cache = BlueprintCache::default();
    let c = clip(&["Caption;id:cap;text:Hello;size:@animate[0,1]:[10,20]"]);
    let root = resolve_clip_at(&mut cache, &c, 5.0).unwrap();
    let cap = first_child(&root);
    assert_eq!(cap.component_props["text"], ResolvedProp::Value(Scalar::from("Hello")));
    assert_eq!(cap.component_props["size"], ResolvedProp::Value(Scalar::Number(20.0)));
    assert!(cap.style_props.is_empty());
}

#[test]
fn media_offsets_skip_resolution() {
    let mut cache = BlueprintCache::default();
    let c = clip(&[
        "Video;id:v;src:clip.mp4;startFrom:@animate[0,1]:[30,60];volume:@animate[0,1]:[0,1]",
    ]);
    let root = resolve_clip_at(&mut cache, &c, 1.0).unwrap();
    let video = first_child(&root);

    let ResolvedProp::SourceRelative(raw) = &video.component_props["startFrom"] else {
        panic!("startFrom must pass through");
    };
    assert!(raw.is_animated());
    assert_eq!(
        video.component_props["volume"].as_value(),
        Some(&Scalar::Number(1.0))
    );
}

#[test]
fn repeated_frames_reuse_the_parsed_tree() {
    let mut cache = BlueprintCache::default();
    let c = clip(&["div;id:a;left:@animate[0,1]:[0px,100px]"]);
    let a = resolve_clip_at(&mut cache, &c, 0.0).unwrap();
    let b = resolve_clip_at(&mut cache, &c, 1.0).unwrap();
    assert_eq!(cache.stats().misses, 1);
    assert_eq!(cache.stats().hits, 1);
    assert_eq!(first_child(&a).style_props["left"].as_value(), Some(&Scalar::from("0px")));
    assert_eq!(first_child(&b).style_props["left"].as_value(), Some(&Scalar::from("100px")));
}

#[test]
fn parse_failures_surface() {
    let mut cache = BlueprintCache::default();
    assert!(resolve_clip_at(&mut cache, &clip(&["div;opacity:1"]), 0.0).is_err());
}

#[test]
fn resolved_tree_serializes_plainly() {
    let mut cache = BlueprintCache::default();
    let root = resolve_clip_at(&mut cache, &clip(&["p;id:t;color:#ff0000;text:x"]), 0.0).unwrap();
    let json = serde_json::to_value(&root).unwrap();
    assert_eq!(json["children"][0]["style_props"]["color"], serde_json::json!("#ff0000"));
    assert_eq!(json["children"][0]["children"][0], serde_json::json!("x"));
    assert_eq!(json["children"][0]["kind"], serde_json::json!("html"));
}
