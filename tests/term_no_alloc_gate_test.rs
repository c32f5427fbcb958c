use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_2048p::core::{GameSnapshot, GameState};
use tui_2048p::term::{encode_diff_into, FrameBuffer, GameView, Viewport};
use tui_2048p::types::GameAction;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

struct Frames {
    fb: FrameBuffer,
    prev: FrameBuffer,
    out: Vec<u8>,
}

fn drive(
    gs: &mut GameState,
    snap: &mut GameSnapshot,
    view: &GameView,
    viewport: Viewport,
    frames: &mut Frames,
) {
    let actions = [
        GameAction::SlideUp,
        GameAction::SlideRight,
        GameAction::Undo,
        GameAction::SlideLeft,
        GameAction::Redo,
        GameAction::SlideDown,
    ];
    for i in 0..600 {
        if !gs.is_playing() {
            gs.reset();
        }
        gs.apply_action(actions[i % actions.len()]);
        gs.snapshot_into(snap);
        view.render_into(snap, viewport, &mut frames.fb);

        frames.out.clear();
        encode_diff_into(&frames.prev, &frames.fb, &mut frames.out).unwrap();
        frames.prev.copy_from(&frames.fb);
    }
}

#[test]
fn diff_encoding_is_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut snap = GameSnapshot::default();
    let mut frames = Frames {
        fb: FrameBuffer::new(viewport.width, viewport.height),
        prev: FrameBuffer::new(viewport.width, viewport.height),
        out: Vec::with_capacity(64 * 1024),
    };

    // Warm-up: an identical game touches every code path once.
    let mut warm = GameState::new(7);
    drive(&mut warm, &mut snap, &view, viewport, &mut frames);

    let mut gs = GameState::new(7);
    let allocs = with_alloc_counting(|| drive(&mut gs, &mut snap, &view, viewport, &mut frames));

    assert!(allocs == 0);
}
