use crate::geometry::*;
use crate::*;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Command {
    Jump { index: usize, animated: bool },
    Strip { offset: f32, animated: bool },
    Indicator { geometry: IndicatorGeometry, animated: bool },
}

/// Records every command and lays tabs out like a horizontal stack.
#[derive(Clone, Debug, Default)]
struct RecordingHost {
    frames: Vec<TabFrame>,
    page_extent: f32,
    viewport: f32,
    content: f32,
    commands: Vec<Command>,
}

impl RecordingHost {
    fn stack(widths: &[f32], spacing: f32, margin: f32, page_extent: f32, viewport: f32) -> Self {
        let mut frames = Vec::with_capacity(widths.len());
        let mut leading = margin;
        for &w in widths {
            frames.push(TabFrame::new(leading, w));
            leading += w + spacing;
        }
        let content = if widths.is_empty() {
            0.0
        } else {
            leading - spacing + margin
        };
        Self {
            frames,
            page_extent,
            viewport,
            content,
            commands: Vec::new(),
        }
    }

    fn indicator_writes(&self) -> Vec<(IndicatorGeometry, bool)> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                Command::Indicator { geometry, animated } => Some((geometry, animated)),
                _ => None,
            })
            .collect()
    }

    fn indicator(&self) -> Option<IndicatorGeometry> {
        self.indicator_writes().last().map(|(g, _)| *g)
    }

    fn strip_offset(&self) -> Option<f32> {
        self.commands.iter().rev().find_map(|c| match *c {
            Command::Strip { offset, .. } => Some(offset),
            _ => None,
        })
    }

    fn jumps(&self) -> Vec<(usize, bool)> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                Command::Jump { index, animated } => Some((index, animated)),
                _ => None,
            })
            .collect()
    }
}

impl GeometryProvider for RecordingHost {
    fn frame_of(&self, index: usize) -> Option<TabFrame> {
        self.frames.get(index).copied()
    }

    fn page_extent(&self) -> f32 {
        self.page_extent
    }
}

impl PageScroller for RecordingHost {
    fn jump_to(&mut self, index: usize, animated: bool) {
        self.commands.push(Command::Jump { index, animated });
    }
}

impl TabStrip for RecordingHost {
    fn viewport_extent(&self) -> f32 {
        self.viewport
    }

    fn content_extent(&self) -> f32 {
        self.content
    }

    fn scroll_to(&mut self, offset: f32, animated: bool) {
        self.commands.push(Command::Strip { offset, animated });
    }
}

impl Indicator for RecordingHost {
    fn set_geometry(&mut self, geometry: IndicatorGeometry, animated: bool) {
        self.commands.push(Command::Indicator { geometry, animated });
    }
}

const WIDTHS: [f32; 5] = [60.0, 80.0, 50.0, 120.0, 70.0];
const SPACING: f32 = 8.0;
const MARGIN: f32 = 16.0;
const PAGE: f32 = 300.0;

fn pages(n: usize) -> Vec<Page<usize>> {
    (0..n).map(|i| Page::new(alloc::format!("Tab({i})"), i)).collect()
}

fn options() -> PagerOptions {
    PagerOptions::new()
        .with_spacing(SPACING)
        .with_outer_margin(MARGIN)
}

fn setup() -> (Coordinator<usize>, RecordingHost) {
    let mut host = RecordingHost::stack(&WIDTHS, SPACING, MARGIN, PAGE, 200.0);
    let mut c = Coordinator::new(options());
    c.set_pages(&mut host, pages(WIDTHS.len()));
    (c, host)
}

fn region(c: &Coordinator<usize>, host: &RecordingHost, index: usize) -> IndicatorGeometry {
    c.tab_geometry(host, index).unwrap().indicator()
}

fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-3, "{a} != {b}");
}

fn assert_geometry(a: IndicatorGeometry, b: IndicatorGeometry) {
    assert_close(a.leading, b.leading);
    assert_close(a.width, b.width);
}

#[test]
fn edge_policy_uses_outer_margin_on_first_and_last_tab() {
    let (c, host) = setup();

    // tab0 frame = 16..76: width + s/2 + m = 60 + 4 + 16
    let first = c.tab_geometry(&host, 0).unwrap();
    assert_close(first.leading, 0.0);
    assert_close(first.width, 80.0);

    // Interior tab: half spacing on both sides.
    let second = c.tab_geometry(&host, 1).unwrap();
    assert_close(second.leading, 80.0);
    assert_close(second.width, 88.0);

    // Last tab ends flush with the strip content.
    let last = c.tab_geometry(&host, 4).unwrap();
    assert_close(last.trailing(), host.content);
    assert_close(last.width, 70.0 + 4.0 + 16.0);

    // Regions tile the strip without gaps.
    for i in 0..4 {
        let a = c.tab_geometry(&host, i).unwrap();
        let b = c.tab_geometry(&host, i + 1).unwrap();
        assert_close(a.trailing(), b.leading);
    }
}

#[test]
fn single_tab_region_uses_margin_on_both_sides() {
    let r = tab_region(0, 1, TabFrame::new(16.0, 60.0), 8.0, 16.0);
    assert_close(r.leading, 0.0);
    assert_close(r.width, 92.0);
}

#[test]
fn edge_region_is_continuous_when_progress_leaves_first_tab() {
    let (mut c, mut host) = setup();
    let r0 = region(&c, &host, 0);

    assert!(c.on_drag_began(&mut host));
    assert!(c.on_scroll_offset_changed(&mut host, 0.0));
    assert_geometry(host.indicator().unwrap(), r0);

    assert!(c.on_scroll_offset_changed(&mut host, 0.3));
    let g = host.indicator().unwrap();
    assert!((g.leading - r0.leading).abs() < 0.1);
    assert!((g.width - r0.width).abs() < 0.1);
}

#[test]
fn set_pages_snaps_everything_without_animation() {
    let (c, host) = setup();
    assert_eq!(c.page_count(), 5);
    assert_eq!(c.selected_index(), 0);
    assert_eq!(c.mode(), Mode::Idle);
    assert_eq!(c.tab_label(3), Some("Tab(3)"));

    assert_eq!(
        host.commands,
        vec![
            Command::Jump {
                index: 0,
                animated: false
            },
            Command::Indicator {
                geometry: IndicatorGeometry::new(0.0, 80.0),
                animated: false
            },
            Command::Strip {
                offset: 0.0,
                animated: false
            },
        ]
    );
}

#[test]
fn tap_then_completion_settles_on_exact_geometry() {
    for i in [1usize, 2, 3, 4] {
        let (mut c, mut host) = setup();
        assert!(c.on_tab_tapped(&mut host, i));
        assert_eq!(c.mode(), Mode::ProgrammaticTransition);
        assert_eq!(c.target_index(), Some(i));
        assert_eq!(host.jumps().last(), Some(&(i, true)));
        assert_eq!(
            host.indicator_writes().last().map(|(_, animated)| *animated),
            Some(true)
        );

        assert!(c.on_jump_completed(&mut host, i));
        assert_eq!(c.selected_index(), i);
        assert_eq!(c.mode(), Mode::Idle);

        let (g, animated) = *host.indicator_writes().last().unwrap();
        assert!(!animated);
        assert_eq!(g, region(&c, &host, i));
        assert_eq!(c.indicator_geometry(&host), Some(g));
    }
}

#[test]
fn tapping_selected_tab_while_idle_is_a_no_op() {
    let (mut c, mut host) = setup();
    host.commands.clear();
    assert!(!c.on_tab_tapped(&mut host, 0));
    assert!(host.commands.is_empty());
    assert_eq!(c.mode(), Mode::Idle);
}

#[test]
fn out_of_range_tap_is_ignored() {
    let (mut c, mut host) = setup();
    host.commands.clear();
    assert!(!c.on_tab_tapped(&mut host, 5));
    assert!(!c.on_tab_tapped(&mut host, usize::MAX));
    assert!(host.commands.is_empty());
    assert_eq!(c.selected_index(), 0);
}

#[test]
fn offsets_during_programmatic_jump_are_ignored() {
    let (mut c, mut host) = setup();
    assert!(c.on_tab_tapped(&mut host, 3));
    host.commands.clear();

    for off in [100.0, 400.0, 700.0, 900.0] {
        assert!(!c.on_scroll_offset_changed(&mut host, off));
    }
    assert!(!c.on_scroll_settled(&mut host, 900.0));
    assert!(host.commands.is_empty());
    assert_eq!(c.mode(), Mode::ProgrammaticTransition);
    assert_eq!(c.selected_index(), 0);
}

#[test]
fn tap_centers_strip_with_clamping() {
    let (mut c, mut host) = setup();

    // tab3 region = 226..354, midpoint 290, viewport 200 => 190
    c.on_tab_tapped(&mut host, 3);
    assert_close(host.strip_offset().unwrap(), 190.0);

    // tab4 midpoint 399 => 299, clamped to content(444) - viewport(200)
    c.on_jump_completed(&mut host, 3);
    c.on_tab_tapped(&mut host, 4);
    assert_close(host.strip_offset().unwrap(), 244.0);

    c.on_jump_completed(&mut host, 4);
    c.on_tab_tapped(&mut host, 0);
    assert_close(host.strip_offset().unwrap(), 0.0);
}

#[test]
fn centered_strip_offset_never_leaves_content() {
    assert_eq!(centered_strip_offset(50.0, 200.0, 1000.0), Some(0.0));
    assert_eq!(centered_strip_offset(500.0, 200.0, 1000.0), Some(400.0));
    assert_eq!(centered_strip_offset(990.0, 200.0, 1000.0), Some(800.0));
    // Content narrower than the viewport never scrolls.
    assert_eq!(centered_strip_offset(150.0, 200.0, 120.0), Some(0.0));
    assert_eq!(centered_strip_offset(150.0, 0.0, 120.0), None);
}

#[test]
fn drag_progress_is_monotonic() {
    for seed in [1u64, 2, 3, 7, 42, 999] {
        let mut rng = Lcg::new(seed);
        let widths: Vec<f32> = (0..6).map(|_| rng.gen_range_u32(20, 200) as f32).collect();
        let spacing = rng.gen_range_u32(0, 24) as f32;
        let margin = rng.gen_range_u32(0, 32) as f32;

        let mut host = RecordingHost::stack(&widths, spacing, margin, PAGE, 240.0);
        let mut c = Coordinator::new(
            PagerOptions::new()
                .with_spacing(spacing)
                .with_outer_margin(margin),
        );
        c.set_pages(&mut host, pages(widths.len()));

        for k in 0..widths.len() - 1 {
            c.restore_selection(&mut host, k);
            assert!(c.on_drag_began(&mut host));

            let from = region(&c, &host, k);
            let to = region(&c, &host, k + 1);
            let width_dir = to.width - from.width;

            let mut prev = from;
            for step in 0..=16 {
                let off = k as f32 * PAGE + step as f32 * (PAGE / 16.0);
                c.on_scroll_offset_changed(&mut host, off);
                let g = host.indicator().unwrap();

                assert!(g.leading + 1e-3 >= prev.leading, "seed={seed} k={k}");
                assert!((g.width - prev.width) * width_dir >= -1e-3, "seed={seed} k={k}");
                prev = g;
            }
            assert_geometry(prev, to);

            c.on_scroll_settled(&mut host, (k + 1) as f32 * PAGE);
            assert_eq!(c.selected_index(), k + 1);
        }
    }
}

#[test]
fn drag_settle_selects_page_and_snaps() {
    let (mut c, mut host) = setup();
    assert!(c.on_drag_began(&mut host));
    assert_eq!(c.mode(), Mode::Dragging);
    assert_eq!(
        c.drag_baseline(),
        Some(DragBaseline {
            offset: 0.0,
            index: 0
        })
    );

    c.on_scroll_offset_changed(&mut host, 150.0);
    let mid = host.indicator().unwrap();
    assert_geometry(mid, region(&c, &host, 0).lerp(region(&c, &host, 1), 0.5));
    assert_eq!(c.indicator_geometry(&host), Some(mid));

    c.on_scroll_offset_changed(&mut host, 300.0);
    assert!(c.on_scroll_settled(&mut host, 300.0));
    assert_eq!(c.selected_index(), 1);
    assert_eq!(c.mode(), Mode::Idle);
    assert_eq!(c.drag_baseline(), None);

    let (g, animated) = *host.indicator_writes().last().unwrap();
    assert!(!animated);
    assert_eq!(g, region(&c, &host, 1));
}

#[test]
fn interrupted_drag_snaps_back_to_selected_page() {
    let (mut c, mut host) = setup();
    c.on_drag_began(&mut host);
    c.on_scroll_offset_changed(&mut host, 90.0);
    assert_ne!(host.indicator(), Some(region(&c, &host, 0)));

    // The page springs back.
    assert!(c.on_scroll_settled(&mut host, 0.0));
    assert_eq!(c.selected_index(), 0);
    assert_eq!(host.indicator(), Some(region(&c, &host, 0)));
}

#[test]
fn dragging_past_last_page_holds_last_tab() {
    let (mut c, mut host) = setup();
    c.restore_selection(&mut host, 4);
    c.on_drag_began(&mut host);

    let last = region(&c, &host, 4);
    for off in [1200.0, 1250.0, 1400.0, 3000.0] {
        assert!(c.on_scroll_offset_changed(&mut host, off));
        assert_eq!(host.indicator(), Some(last));
    }
    assert_eq!(
        c.progress(&host),
        Some(PageProgress {
            from_index: 4,
            to_index: 4,
            progress: 0.0
        })
    );
}

#[test]
fn dragging_before_first_page_holds_first_tab() {
    let (mut c, mut host) = setup();
    c.on_drag_began(&mut host);
    assert!(c.on_scroll_offset_changed(&mut host, -120.0));
    assert_eq!(host.indicator(), Some(region(&c, &host, 0)));
}

#[test]
fn tap_while_dragging_cancels_drag_without_flash() {
    let (mut c, mut host) = setup();
    c.on_drag_began(&mut host);
    for off in [60.0, 120.0, 180.0] {
        c.on_scroll_offset_changed(&mut host, off);
    }
    let r1 = region(&c, &host, 1);
    let r2 = region(&c, &host, 2);

    let before = host.commands.len();
    assert!(c.on_tab_tapped(&mut host, 2));
    assert_eq!(c.mode(), Mode::ProgrammaticTransition);
    assert_eq!(c.drag_baseline(), None);

    // The animated jump produces offsets and a late settle from the abandoned drag.
    for off in [300.0, 450.0, 600.0] {
        c.on_scroll_offset_changed(&mut host, off);
    }
    assert!(!c.on_scroll_settled(&mut host, 300.0));
    assert!(c.on_jump_completed(&mut host, 2));
    assert_eq!(c.selected_index(), 2);

    let writes: Vec<_> = host.commands[before..]
        .iter()
        .filter_map(|cmd| match *cmd {
            Command::Indicator { geometry, animated } => Some((geometry, animated)),
            _ => None,
        })
        .collect();
    assert_eq!(writes, vec![(r2, true), (r2, false)]);
    assert!(writes.iter().all(|(g, _)| *g != r1));
}

#[test]
fn tap_while_programmatic_retargets_and_ignores_stale_completion() {
    let (mut c, mut host) = setup();
    c.on_tab_tapped(&mut host, 1);
    assert!(c.on_tab_tapped(&mut host, 3));
    assert_eq!(c.target_index(), Some(3));

    // Same target again is a no-op.
    assert!(!c.on_tab_tapped(&mut host, 3));

    assert!(!c.on_jump_completed(&mut host, 1));
    assert_eq!(c.mode(), Mode::ProgrammaticTransition);
    assert!(c.on_jump_completed(&mut host, 3));
    assert_eq!(c.selected_index(), 3);

    // Nothing in flight: any completion is stale.
    assert!(!c.on_jump_completed(&mut host, 3));
}

#[test]
fn tapping_back_to_selected_tab_mid_jump_is_accepted() {
    let (mut c, mut host) = setup();
    c.on_tab_tapped(&mut host, 2);
    assert!(c.on_tab_tapped(&mut host, 0));
    assert_eq!(c.target_index(), Some(0));
    assert!(c.on_jump_completed(&mut host, 0));
    assert_eq!(c.selected_index(), 0);
}

#[test]
fn set_pages_twice_is_idempotent() {
    let (mut c, mut host) = setup();
    c.on_tab_tapped(&mut host, 2);
    c.on_jump_completed(&mut host, 2);

    host.commands.clear();
    c.set_pages(&mut host, pages(5));
    let once = host.commands.clone();
    let state_once = c.selection_state();

    host.commands.clear();
    c.set_pages(&mut host, pages(5));
    assert_eq!(host.commands, once);
    assert_eq!(c.selection_state(), state_once);
    assert_eq!(c.selected_index(), 2);
}

#[test]
fn shrinking_page_list_clamps_selection() {
    let mut host = RecordingHost::stack(&[40.0; 8], SPACING, MARGIN, PAGE, 200.0);
    let mut c = Coordinator::new(options());
    c.set_pages(&mut host, pages(8));
    c.on_tab_tapped(&mut host, 5);
    c.on_jump_completed(&mut host, 5);
    assert_eq!(c.selected_index(), 5);

    host = RecordingHost::stack(&[40.0; 3], SPACING, MARGIN, PAGE, 200.0);
    c.set_pages(&mut host, pages(3));
    assert_eq!(c.selected_index(), 2);
    assert_eq!(c.mode(), Mode::Idle);
    assert_eq!(host.jumps(), vec![(2, false)]);
    assert_eq!(host.indicator(), Some(region(&c, &host, 2)));
    assert_close(c.last_offset(), 600.0);
}

#[test]
fn set_pages_mid_transition_forces_idle() {
    let (mut c, mut host) = setup();
    c.on_tab_tapped(&mut host, 4);
    c.set_pages(&mut host, pages(5));
    assert_eq!(c.mode(), Mode::Idle);
    assert_eq!(c.selected_index(), 0);
    assert!(!c.on_jump_completed(&mut host, 4));
}

#[test]
fn stale_handles_do_not_resolve_after_rebuild() {
    let (mut c, mut host) = setup();
    let page = c.page_handle(3).unwrap();
    let tab = c.tab_handle(3).unwrap();
    assert_eq!(c.resolve_page(page).map(|p| p.content), Some(3));
    assert_eq!(c.resolve_tab(tab).map(|t| t.page), Some(page));

    c.set_pages(&mut host, pages(5));
    assert_eq!(c.resolve_page(page), None);
    assert_eq!(c.resolve_tab(tab), None);
    assert_eq!(c.page_handle(5), None);

    let fresh = c.tab(3).unwrap().page;
    assert_eq!(c.resolve_page(fresh).map(|p| p.content), Some(3));
    assert_eq!(c.generation(), 2);
}

#[test]
fn empty_page_list_hides_indicator_and_ignores_events() {
    let mut host = RecordingHost::stack(&[], SPACING, MARGIN, PAGE, 200.0);
    let mut c: Coordinator<usize> = Coordinator::new(options());
    c.set_pages(&mut host, Vec::new());
    assert_eq!(host.indicator(), Some(IndicatorGeometry::ZERO));
    assert_eq!(c.indicator_geometry(&host), Some(IndicatorGeometry::ZERO));
    assert!(host.jumps().is_empty());

    host.commands.clear();
    assert!(!c.on_tab_tapped(&mut host, 0));
    assert!(!c.on_drag_began(&mut host));
    assert!(!c.on_scroll_offset_changed(&mut host, 100.0));
    assert!(!c.on_scroll_settled(&mut host, 100.0));
    assert!(!c.on_jump_completed(&mut host, 0));
    assert!(!c.on_layout_changed(&mut host));
    assert!(!c.restore_selection(&mut host, 3));
    assert!(host.commands.is_empty());
    assert_eq!(c.selected_index(), 0);
    assert_eq!(c.mode(), Mode::Idle);
}

#[test]
fn zero_extent_defers_until_layout_changed() {
    let mut host = RecordingHost::stack(&WIDTHS, SPACING, MARGIN, 0.0, 200.0);
    let mut c = Coordinator::new(options());
    c.set_pages(&mut host, pages(5));
    assert!(!c.is_layout_pending());

    c.on_drag_began(&mut host);
    host.commands.clear();
    assert!(!c.on_scroll_offset_changed(&mut host, 150.0));
    assert!(host.commands.is_empty());
    assert!(c.is_layout_pending());
    assert_eq!(c.indicator_geometry(&host), None);

    // Settling without an extent keeps the selection.
    assert!(c.on_scroll_settled(&mut host, 150.0));
    assert_eq!(c.selected_index(), 0);

    host.page_extent = PAGE;
    assert!(c.on_layout_changed(&mut host));
    assert!(!c.is_layout_pending());
    assert_eq!(host.indicator(), Some(region(&c, &host, 0)));
}

#[test]
fn missing_frames_defer_until_layout_changed() {
    let mut host = RecordingHost::stack(&WIDTHS, SPACING, MARGIN, PAGE, 200.0);
    let frames = core::mem::take(&mut host.frames);
    let mut c = Coordinator::new(options());
    c.set_pages(&mut host, pages(5));
    assert!(c.is_layout_pending());
    assert_eq!(host.indicator(), None);
    assert_eq!(host.jumps(), vec![(0, false)]);

    host.frames = frames;
    c.on_layout_changed(&mut host);
    assert_eq!(host.indicator(), Some(region(&c, &host, 0)));
}

#[test]
fn layout_change_resnaps_without_animation() {
    let (mut c, mut host) = setup();
    c.on_tab_tapped(&mut host, 2);
    c.on_jump_completed(&mut host, 2);

    // Rotation: wider pages, wider tabs.
    let wider: Vec<f32> = WIDTHS.iter().map(|w| w * 1.5).collect();
    host = RecordingHost::stack(&wider, SPACING, MARGIN, 500.0, 400.0);
    assert!(c.on_layout_changed(&mut host));
    assert_eq!(c.selected_index(), 2);
    assert_eq!(host.jumps(), vec![(2, false)]);
    assert!(host.commands.iter().all(|cmd| match *cmd {
        Command::Jump { animated, .. }
        | Command::Strip { animated, .. }
        | Command::Indicator { animated, .. } => !animated,
    }));
    assert_eq!(host.indicator(), Some(region(&c, &host, 2)));
    assert_close(c.last_offset(), 1000.0);
}

#[test]
fn layout_change_mid_jump_adopts_target() {
    let (mut c, mut host) = setup();
    c.on_tab_tapped(&mut host, 3);
    host.commands.clear();
    assert!(c.on_layout_changed(&mut host));
    assert_eq!(c.mode(), Mode::Idle);
    assert_eq!(c.selected_index(), 3);
    assert_eq!(host.jumps(), vec![(3, false)]);
    assert!(!c.on_jump_completed(&mut host, 3));
}

#[test]
fn drag_relative_policy_follows_baseline() {
    let mut host = RecordingHost::stack(&WIDTHS, SPACING, MARGIN, PAGE, 200.0);
    let mut c = Coordinator::new(options().with_progress_policy(ProgressPolicy::DragRelative));
    c.set_pages(&mut host, pages(5));
    c.restore_selection(&mut host, 2);
    c.on_drag_began(&mut host);
    assert_eq!(
        c.drag_baseline(),
        Some(DragBaseline {
            offset: 600.0,
            index: 2
        })
    );

    // Backwards half a page: from tab2 towards tab1.
    c.on_scroll_offset_changed(&mut host, 450.0);
    let expected = region(&c, &host, 2).lerp(region(&c, &host, 1), 0.5);
    assert_geometry(host.indicator().unwrap(), expected);

    // Past a full page the progress is clamped.
    c.on_scroll_offset_changed(&mut host, 100.0);
    assert_geometry(host.indicator().unwrap(), region(&c, &host, 1));
}

#[test]
fn drag_started_mid_jump_diverges_between_policies() {
    let run = |policy: ProgressPolicy| {
        let mut host = RecordingHost::stack(&WIDTHS, SPACING, MARGIN, PAGE, 200.0);
        let mut c = Coordinator::new(options().with_progress_policy(policy));
        c.set_pages(&mut host, pages(5));
        c.on_tab_tapped(&mut host, 3);
        c.on_scroll_offset_changed(&mut host, 450.0);
        c.on_drag_began(&mut host);
        assert_eq!(
            c.drag_baseline(),
            Some(DragBaseline {
                offset: 450.0,
                index: 3
            })
        );
        c.on_scroll_offset_changed(&mut host, 480.0);
        (
            host.indicator().unwrap(),
            region(&c, &host, 1).lerp(region(&c, &host, 2), 0.6),
            region(&c, &host, 3).lerp(region(&c, &host, 4), 0.1),
        )
    };

    let (g, absolute, _) = run(ProgressPolicy::Absolute);
    assert_geometry(g, absolute);

    let (g, _, relative) = run(ProgressPolicy::DragRelative);
    assert_geometry(g, relative);
}

#[test]
fn strip_tracks_indicator_while_dragging() {
    let (mut c, mut host) = setup();
    c.on_drag_began(&mut host);
    c.on_scroll_offset_changed(&mut host, 2.5 * PAGE);
    let g = host.indicator().unwrap();
    let strip = host.commands.last().copied().unwrap();
    assert_eq!(
        strip,
        Command::Strip {
            offset: centered_strip_offset(g.midpoint(), 200.0, host.content).unwrap(),
            animated: false
        }
    );

    let mut host2 = RecordingHost::stack(&WIDTHS, SPACING, MARGIN, PAGE, 200.0);
    let mut c2 = Coordinator::new(options().with_track_strip_while_dragging(false));
    c2.set_pages(&mut host2, pages(5));
    c2.on_drag_began(&mut host2);
    host2.commands.clear();
    c2.on_scroll_offset_changed(&mut host2, 2.5 * PAGE);
    assert!(
        host2
            .commands
            .iter()
            .all(|cmd| !matches!(cmd, Command::Strip { .. }))
    );
}

#[test]
fn idle_settle_on_another_page_is_adopted() {
    let (mut c, mut host) = setup();
    assert!(!c.on_scroll_settled(&mut host, 0.0));
    assert!(c.on_scroll_settled(&mut host, 610.0));
    assert_eq!(c.selected_index(), 2);
    assert_eq!(host.indicator(), Some(region(&c, &host, 2)));
}

#[test]
fn non_finite_offsets_are_ignored() {
    let (mut c, mut host) = setup();
    c.on_drag_began(&mut host);
    host.commands.clear();
    assert!(!c.on_scroll_offset_changed(&mut host, f32::NAN));
    assert!(!c.on_scroll_settled(&mut host, f32::INFINITY));
    assert!(host.commands.is_empty());
    assert_eq!(c.mode(), Mode::Dragging);
}

#[test]
fn on_change_fires_once_per_settled_selection_change() {
    let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut host = RecordingHost::stack(&WIDTHS, SPACING, MARGIN, PAGE, 200.0);
    let mut c = Coordinator::new(options().with_on_change(Some(move |s: SelectionState| {
        sink.lock().unwrap().push(s.selected_index);
    })));
    c.set_pages(&mut host, pages(5));

    c.on_tab_tapped(&mut host, 3);
    c.on_jump_completed(&mut host, 3);
    c.on_drag_began(&mut host);
    c.on_scroll_offset_changed(&mut host, 1000.0);
    c.on_scroll_settled(&mut host, 1200.0);
    c.on_drag_began(&mut host);
    c.on_scroll_settled(&mut host, 1200.0);
    c.restore_selection(&mut host, 1);

    assert_eq!(*seen.lock().unwrap(), vec![3, 4, 1]);
}

#[test]
fn restore_selection_clamps_and_resyncs() {
    let (mut c, mut host) = setup();
    host.commands.clear();
    assert!(c.restore_selection(&mut host, 42));
    assert_eq!(c.selected_index(), 4);
    assert_eq!(host.jumps(), vec![(4, false)]);
    assert_close(c.last_offset(), 1200.0);
    assert_eq!(c.selection_state().mode, Mode::Idle);
}

#[test]
fn queued_events_are_processed_in_arrival_order() {
    let (mut c, mut host) = setup();
    c.enqueue(PagerEvent::DragBegan);
    c.enqueue(PagerEvent::ScrollOffsetChanged(150.0));
    c.enqueue(PagerEvent::TabTapped(4));
    c.enqueue(PagerEvent::ScrollOffsetChanged(900.0));
    assert_eq!(c.pending_events(), 4);
    assert_eq!(c.mode(), Mode::Idle);

    // Last event was an ignored offset during the jump.
    assert!(!c.process(&mut host));
    assert_eq!(c.pending_events(), 0);
    assert_eq!(c.mode(), Mode::ProgrammaticTransition);

    assert!(c.dispatch(&mut host, PagerEvent::JumpCompleted(4)));
    assert_eq!(c.selected_index(), 4);
}

#[test]
fn set_options_resnaps_idle_geometry() {
    let (mut c, mut host) = setup();
    c.update_options(&mut host, |o| o.outer_margin = 0.0);
    let g = host.indicator().unwrap();
    assert_close(g.leading, 16.0);
    assert_close(g.width, 64.0);
}

#[test]
fn page_progress_matches_formula() {
    assert_eq!(page_progress(0.0, 0.0, 3), None);
    assert_eq!(page_progress(10.0, -1.0, 3), None);
    assert_eq!(page_progress(10.0, 100.0, 0), None);

    let p = page_progress(150.0, 100.0, 3).unwrap();
    assert_eq!((p.from_index, p.to_index), (1, 2));
    assert_close(p.progress, 0.5);

    assert!(page_progress(250.0, 100.0, 3).unwrap().is_settled());
    assert_eq!(
        page_progress(-50.0, 100.0, 3),
        Some(PageProgress {
            from_index: 0,
            to_index: 1,
            progress: 0.0
        })
    );
    assert_eq!(page_progress(50.0, 100.0, 1), Some(PageProgress::at(0)));
}

#[test]
fn settled_page_rounds_to_nearest() {
    assert_eq!(settled_page(149.0, 100.0, 5), Some(1));
    assert_eq!(settled_page(151.0, 100.0, 5), Some(2));
    assert_eq!(settled_page(-30.0, 100.0, 5), Some(0));
    assert_eq!(settled_page(9000.0, 100.0, 5), Some(4));
    assert_eq!(settled_page(100.0, 0.0, 5), None);
}

#[test]
fn drag_relative_progress_ignores_tiny_deltas() {
    let baseline = DragBaseline {
        offset: 300.0,
        index: 1,
    };
    assert_eq!(
        drag_relative_progress(300.1, baseline, 300.0, 3),
        Some(PageProgress::at(1))
    );
    // First page cannot move further back.
    let first = DragBaseline {
        offset: 0.0,
        index: 0,
    };
    assert_eq!(
        drag_relative_progress(-100.0, first, 300.0, 3),
        Some(PageProgress::at(0))
    );
}

#[test]
fn labels_follow_page_order() {
    let mut host = RecordingHost::stack(&[50.0; 3], SPACING, MARGIN, PAGE, 200.0);
    let mut c = Coordinator::new(options());
    let list = vec![
        Page::new("Home", String::from("home")),
        Page::new("Search", String::from("search")),
        Page::new("Profile", String::from("profile")),
    ];
    c.set_pages(&mut host, list);
    let labels: Vec<_> = (0..3).filter_map(|i| c.tab_label(i)).collect();
    assert_eq!(labels, vec!["Home", "Search", "Profile"]);
    assert_eq!(
        c.pages().map(|p| p.content.as_str()).collect::<Vec<_>>(),
        vec!["home", "search", "profile"]
    );
}
