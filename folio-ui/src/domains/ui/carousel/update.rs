use folio_contracts::CarouselItem;

use super::engine::{CarouselEngine, ItemClick};
use super::messages::{CarouselMessage, CarouselOutcome};

pub fn update<I: CarouselItem>(
    engine: &mut CarouselEngine<I>,
    msg: CarouselMessage,
) -> CarouselOutcome {
    match msg {
        CarouselMessage::Tick(now) => {
            if engine.tick(now) {
                repositioned(engine)
            } else {
                CarouselOutcome::Idle
            }
        }
        CarouselMessage::PointerDown { x, at, source } => {
            engine.press(x, at, source);
            CarouselOutcome::Idle
        }
        CarouselMessage::PointerMove { x, at } => {
            if !engine.is_dragging() {
                return CarouselOutcome::Idle;
            }
            engine.drag_to(x, at);
            repositioned(engine)
        }
        CarouselMessage::PointerUp { at } => {
            engine.release(at);
            CarouselOutcome::Idle
        }
        CarouselMessage::Arrow(direction) => {
            if engine.step(direction) {
                repositioned(engine)
            } else {
                CarouselOutcome::Idle
            }
        }
        CarouselMessage::ItemClicked(index) => match engine.click_item(index) {
            ItemClick::Suppressed => CarouselOutcome::ClickSuppressed,
            ItemClick::Recentered(i) => CarouselOutcome::Recentered(i),
            ItemClick::Ignored => CarouselOutcome::Idle,
        },
        CarouselMessage::Resize(bounds) => {
            engine.set_track(bounds);
            repositioned(engine)
        }
    }
}

fn repositioned<I: CarouselItem>(engine: &CarouselEngine<I>) -> CarouselOutcome {
    CarouselOutcome::Repositioned {
        centered: engine.centered_index(),
    }
}
