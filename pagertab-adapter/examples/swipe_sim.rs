use pagertab::{Page, PagerOptions};
use pagertab_adapter::{Controller, SimHost, StackLayout};

fn main() {
    // Example: a frame loop driving the coordinator through a simulated host.
    //
    // A real adapter would:
    // - forward taps, drags and resizes to the controller
    // - call tick(now_ms) once per frame
    // - apply the snapshot to its page container, tab strip and indicator view
    let layout = StackLayout::new(8.0, 16.0, 240.0);
    let options = PagerOptions::new().with_spacing(8.0).with_outer_margin(16.0);
    let mut c = Controller::new(options, SimHost::new(layout, 360.0));

    let labels = ["Inbox", "Starred", "Snoozed", "Sent", "Drafts", "Archive"];
    c.set_pages(
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| Page::new(*label, i))
            .collect(),
        0,
    );

    let mut now_ms = 0u64;
    println!("tap 4");
    c.tap(4, now_ms);
    while c.is_animating() {
        now_ms += 16;
        let snap = c.tick(now_ms);
        if now_ms % 64 == 0 {
            println!(
                "t={now_ms} page={:.1} strip={:.1} indicator=[{:.1}, +{:.1}]",
                snap.page_offset, snap.strip_offset, snap.indicator.leading, snap.indicator.width
            );
        }
    }

    println!("swipe back one page");
    c.begin_drag(now_ms);
    let start = c.snapshot().page_offset;
    for step in 1..=10 {
        now_ms += 16;
        c.drag_to(start - step as f32 * 24.0, now_ms);
    }
    c.end_drag(now_ms);
    now_ms = c.run_until_idle(now_ms, 16);

    let snap = c.snapshot();
    println!(
        "done at t={now_ms}: selected={} page={:.1} indicator=[{:.1}, +{:.1}]",
        snap.selection.selected_index,
        snap.page_offset,
        snap.indicator.leading,
        snap.indicator.width
    );
}
