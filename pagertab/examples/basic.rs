// Example: a minimal host that prints what the coordinator asks of it.
use pagertab::{
    Coordinator, GeometryProvider, Indicator, IndicatorGeometry, Page, PageScroller,
    PagerOptions, TabFrame, TabStrip,
};

struct PrintHost {
    frames: Vec<TabFrame>,
    page_extent: f32,
    viewport: f32,
}

impl GeometryProvider for PrintHost {
    fn frame_of(&self, index: usize) -> Option<TabFrame> {
        self.frames.get(index).copied()
    }

    fn page_extent(&self) -> f32 {
        self.page_extent
    }
}

impl PageScroller for PrintHost {
    fn jump_to(&mut self, index: usize, animated: bool) {
        println!("  pages.jump_to({index}, animated={animated})");
    }
}

impl TabStrip for PrintHost {
    fn viewport_extent(&self) -> f32 {
        self.viewport
    }

    fn content_extent(&self) -> f32 {
        self.frames.last().map_or(0.0, |f| f.trailing() + 16.0)
    }

    fn scroll_to(&mut self, offset: f32, animated: bool) {
        println!("  strip.scroll_to({offset:.1}, animated={animated})");
    }
}

impl Indicator for PrintHost {
    fn set_geometry(&mut self, g: IndicatorGeometry, animated: bool) {
        println!(
            "  indicator = [{:.1}, +{:.1}] animated={animated}",
            g.leading, g.width
        );
    }
}

fn main() {
    let mut host = PrintHost {
        frames: vec![
            TabFrame::new(16.0, 60.0),
            TabFrame::new(84.0, 80.0),
            TabFrame::new(172.0, 50.0),
            TabFrame::new(230.0, 120.0),
        ],
        page_extent: 320.0,
        viewport: 200.0,
    };
    let options = PagerOptions::new()
        .with_spacing(8.0)
        .with_outer_margin(16.0)
        .with_on_change(Some(|s: pagertab::SelectionState| {
            println!("  on_change -> {}", s.selected_index)
        }));
    let mut c = Coordinator::new(options);

    println!("set_pages");
    c.set_pages(
        &mut host,
        ["Home", "Trending", "News", "Subscriptions"]
            .into_iter()
            .enumerate()
            .map(|(i, label)| Page::new(label, i))
            .collect(),
    );

    println!("tap 3");
    c.on_tab_tapped(&mut host, 3);
    println!("jump completed");
    c.on_jump_completed(&mut host, 3);

    println!("drag back towards page 2");
    c.on_drag_began(&mut host);
    for offset in [900.0, 800.0, 700.0, 640.0] {
        c.on_scroll_offset_changed(&mut host, offset);
    }
    c.on_scroll_settled(&mut host, 640.0);

    println!("state = {:?}", c.selection_state());
}
