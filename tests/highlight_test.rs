use paper_alluvial::{
    BoxId, Dimension, EdgeKey, EntityGraph, EntityId, HighlightError, HoverState, PaperStore,
    Visualization, VizConfig,
};
use std::collections::BTreeSet;

const CATEGORIES: &str = "Category,Subcategory
Vision,Segmentation
Vision,Tracking
Language,Translation
";

const PAPERS: &str = "Title,Abstract,Authors,Publication year,Labels filed in
Deep Cuts,We cut.,\"['A. Smith', 'B. Lee']\",2020,Segmentation;NDI
Cut Again,Again.,\"['B. Lee', 'C. Wu']\",2021,Segmentation
Follow Me,Tracks.,\"['D. Kim']\",2021,Tracking;To Summarize
Lost,Unknown.,\"['E. Xu']\",2022,Xyz
Broken,Bad.,__import__('os'),2022,Translation
";

fn viz() -> Visualization {
    Visualization::from_store(VizConfig::default(), PaperStore::from_csv(CATEGORIES, PAPERS).unwrap())
}

fn boxed(viz: &Visualization, dimension: Dimension, label: &str) -> BoxId {
    viz.find(dimension, label).unwrap()
}

/// Boxes reachable by walking only leftward or only rightward from `start`
fn monotone_reach(graph: &EntityGraph, start: BoxId, visible: &[Dimension]) -> BTreeSet<BoxId> {
    let mut reached = BTreeSet::new();
    reached.insert(start);
    for step in [Dimension::left as fn(&Dimension) -> Option<Dimension>, Dimension::right] {
        let mut frontier = vec![start];
        while let Some(id) = frontier.pop() {
            let Some(next) = step(&id.dimension) else {
                continue;
            };
            if !visible.contains(&next) {
                continue;
            }
            for related in graph.related(id, next) {
                reached.insert(related);
                frontier.push(related);
            }
        }
    }
    reached
}

fn emphasized(viz: &Visualization) -> BTreeSet<BoxId> {
    viz.scene().emphasized_boxes().into_iter().collect()
}

#[test]
fn test_focus_shared_category_reaches_both_years() {
    let mut viz = viz();
    let segmentation = boxed(&viz, Dimension::Category, "Segmentation");
    let y2020 = boxed(&viz, Dimension::Year, "2020");
    let y2021 = boxed(&viz, Dimension::Year, "2021");

    viz.pointer_enter(segmentation).unwrap();
    assert_eq!(viz.hover_state(), HoverState::Focused(segmentation));

    let lit = emphasized(&viz);
    assert!(lit.contains(&y2020));
    assert!(lit.contains(&y2021));
    for author in ["A. Smith", "B. Lee", "C. Wu", "D. Kim"] {
        assert!(lit.contains(&boxed(&viz, Dimension::Author, author)), "{author}");
    }
    assert!(!lit.contains(&boxed(&viz, Dimension::Author, "E. Xu")));

    let edges: BTreeSet<EdgeKey> = viz.scene().lit_edges().into_iter().collect();
    assert!(edges.contains(&EdgeKey::new(y2020, segmentation)));
    assert!(edges.contains(&EdgeKey::new(y2021, segmentation)));
}

#[test]
fn test_walk_does_not_turn_back() {
    let mut viz = viz();
    let segmentation = boxed(&viz, Dimension::Category, "Segmentation");
    viz.pointer_enter(segmentation).unwrap();

    // 2021 also relates to Tracking, but the rightward walk never steps left
    let tracking = boxed(&viz, Dimension::Category, "Tracking");
    assert!(!emphasized(&viz).contains(&tracking));
    let visual = viz.scene().get_box(tracking).unwrap().visual;
    assert_eq!(visual.opacity, viz.config().layout.dimmed_box_opacity);
    assert!(!visual.stroked);
}

#[test]
fn test_focus_emphasizes_exactly_the_reachable_set() {
    let mut viz = viz();
    let all: Vec<BoxId> = viz.scene().boxes().map(|b| b.id).collect();

    for id in all {
        viz.pointer_enter(id).unwrap();
        let expected = monotone_reach(viz.graph(), id, viz.layout().visible_dimensions());
        assert_eq!(emphasized(&viz), expected, "focus {id}");

        let expected_edges: BTreeSet<EdgeKey> = viz
            .scene()
            .edges()
            .map(|e| e.key)
            .filter(|key| expected.iter().any(|b| key.touches(*b)))
            .collect();
        let lit: BTreeSet<EdgeKey> = viz.scene().lit_edges().into_iter().collect();
        assert_eq!(lit, expected_edges, "focus {id}");

        for scene_box in viz.scene().boxes() {
            if !expected.contains(&scene_box.id) {
                assert!(!scene_box.visual.stroked);
                assert!(scene_box.visual.opacity < 1.0);
            }
        }

        viz.pointer_leave();
        assert!(viz.scene().is_idle());
        assert_eq!(viz.hover_state(), HoverState::Idle);
    }
}

#[test]
fn test_rapid_enter_leave_sequence() {
    let mut viz = viz();
    let a = boxed(&viz, Dimension::Group, "Language");
    let b = boxed(&viz, Dimension::Author, "D. Kim");

    viz.pointer_enter(a).unwrap();
    viz.pointer_leave();
    viz.pointer_enter(b).unwrap();
    assert_eq!(viz.hover_state(), HoverState::Focused(b));
    assert_eq!(
        emphasized(&viz),
        monotone_reach(viz.graph(), b, viz.layout().visible_dimensions())
    );
    assert!(!emphasized(&viz).contains(&a));
}

#[test]
fn test_hidden_author_column_is_never_touched() {
    let mut viz = viz();
    viz.set_show_authors(false);
    assert!(!viz.scene().has_column(Dimension::Author));
    assert!(viz
        .scene()
        .edges()
        .all(|e| e.key.to.dimension != Dimension::Author));

    let y2021 = boxed(&viz, Dimension::Year, "2021");
    viz.pointer_enter(y2021).unwrap();
    assert!(emphasized(&viz).iter().all(|id| id.dimension != Dimension::Author));

    let author = boxed(&viz, Dimension::Author, "B. Lee");
    assert_eq!(viz.pointer_enter(author), Err(HighlightError::UnknownBox(author)));
    assert_eq!(viz.hover_state(), HoverState::Focused(y2021));
}

#[test]
fn test_unknown_box_leaves_state_alone() {
    let mut viz = viz();
    let missing = EntityId::new(Dimension::Year, 99);
    assert_eq!(viz.pointer_enter(missing), Err(HighlightError::UnknownBox(missing)));
    assert!(viz.scene().is_idle());
    assert_eq!(viz.hover_state(), HoverState::Idle);
    assert!(viz.click(missing).is_err());
}

#[test]
fn test_click_lists_papers_without_changing_focus() {
    let mut viz = viz();
    let segmentation = boxed(&viz, Dimension::Category, "Segmentation");
    viz.pointer_enter(segmentation).unwrap();

    let y2021 = boxed(&viz, Dimension::Year, "2021");
    let panel = viz.click(y2021).unwrap();
    let titles: Vec<&str> = panel.summaries.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Cut Again", "Follow Me"]);
    assert_eq!(panel.summaries[0].byline, "2021 · B. Lee, C. Wu");
    assert_eq!(panel.summaries[1].abstract_text, "Tracks.");
    assert!(panel.scrolled);

    assert_eq!(viz.hover_state(), HoverState::Focused(segmentation));
}

#[test]
fn test_click_shows_raw_authors_when_unparseable() {
    let mut viz = viz();
    let translation = boxed(&viz, Dimension::Category, "Translation");
    let panel = viz.click(translation).unwrap();
    assert_eq!(panel.summaries.len(), 1);
    assert_eq!(panel.summaries[0].byline, "2022 · __import__('os')");
}
