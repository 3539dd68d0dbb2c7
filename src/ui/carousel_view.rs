use crate::app::SlideContent;
use crate::carousel::{Carousel, CarouselEvent, Point};
use egui::{self, Align2, Color32, CornerRadius, FontId, Pos2, Rect, Sense, TouchId, TouchPhase, Vec2};
use std::time::Duration;

const DOT_RADIUS: f32 = 6.0;
const DOT_SPACING: f32 = 22.0;
const DOT_MARGIN: f32 = 24.0;

/// Input bookkeeping that has to survive between frames.
#[derive(Debug, Default, Clone)]
pub struct CarouselViewState {
    hovered: bool,
    touch: Option<TouchId>,
    dragging: bool,
}

pub struct CarouselStyle {
    pub accent: Color32,
    pub background: Color32,
    pub transition: Duration,
}

/// Paints the carousel into the remaining space of `ui` and returns the
/// input events it received this frame, in arrival order.
pub fn show_carousel(
    ui: &mut egui::Ui,
    carousel: &Carousel,
    slides: &[SlideContent],
    view: &mut CarouselViewState,
    style: &CarouselStyle,
) -> Vec<CarouselEvent> {
    let rect = ui.available_rect_before_wrap();
    let response = ui.allocate_rect(rect, Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, CornerRadius::ZERO, style.background);

    // The track is `slide_count` panels wide; its transform is a percentage of that width
    let count = slides.len().max(1);
    let track_width = rect.width() * count as f32;
    let target = carousel.markup().track_offset_percent() / 100.0 * track_width;
    let offset = ui.ctx().animate_value_with_time(
        response.id.with("track_offset"),
        target,
        style.transition.as_secs_f32(),
    );

    for (i, slide) in slides.iter().enumerate() {
        let slide_rect = rect.translate(Vec2::new(offset + i as f32 * rect.width(), 0.0));
        if slide_rect.intersects(rect) {
            paint_slide(&painter, slide_rect, slide);
        }
    }

    let mut events = Vec::new();
    paint_indicators(ui, rect, carousel, style, response.id, &mut events);
    collect_pointer_events(ui, rect, view, &mut events);

    events
}

fn paint_slide(painter: &egui::Painter, rect: Rect, slide: &SlideContent) {
    match slide {
        SlideContent::Placeholder { title, color } => {
            painter.rect_filled(rect.shrink(12.0), CornerRadius::same(8), *color);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                title,
                FontId::proportional(32.0),
                Color32::WHITE,
            );
        }
        SlideContent::Image { texture, .. } => {
            // Preserve aspect ratio
            let tex_size = texture.size_vec2();
            let scale = (rect.width() / tex_size.x).min(rect.height() / tex_size.y);
            let image_rect = Rect::from_center_size(rect.center(), tex_size * scale);
            painter.image(
                texture.id(),
                image_rect,
                Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        }
        SlideContent::Pending { .. } => {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "Loading…",
                FontId::proportional(18.0),
                Color32::from_rgb(100, 100, 100),
            );
        }
        SlideContent::Failed { path, message } => {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                format!("{}\n{}", path.display(), message),
                FontId::proportional(14.0),
                Color32::from_rgb(255, 80, 80),
            );
        }
    }
}

fn paint_indicators(
    ui: &mut egui::Ui,
    rect: Rect,
    carousel: &Carousel,
    style: &CarouselStyle,
    id: egui::Id,
    events: &mut Vec<CarouselEvent>,
) {
    let dots = &carousel.markup().indicators;
    if dots.is_empty() {
        return;
    }

    let row_width = (dots.len() - 1) as f32 * DOT_SPACING;
    let first = Pos2::new(rect.center().x - row_width / 2.0, rect.bottom() - DOT_MARGIN);

    for (i, dot) in dots.iter().enumerate() {
        let center = first + Vec2::new(i as f32 * DOT_SPACING, 0.0);
        let hit = Rect::from_center_size(center, Vec2::splat(DOT_SPACING));
        let dot_response = ui.interact(hit, id.with(("dot", i)), Sense::click());

        let color = if dot.active {
            style.accent
        } else if dot_response.hovered() {
            Color32::from_gray(200)
        } else {
            Color32::from_gray(120)
        };
        ui.painter().circle_filled(center, DOT_RADIUS, color);

        if dot_response.clicked() {
            events.push(CarouselEvent::IndicatorClick { indicator: i });
        }
    }
}

/// Touch, drag and hover. Pointer events that egui synthesizes from a touch
/// are skipped while that touch is active so a swipe is not also a drag.
fn collect_pointer_events(
    ui: &egui::Ui,
    rect: Rect,
    view: &mut CarouselViewState,
    events: &mut Vec<CarouselEvent>,
) {
    let hovered = ui.rect_contains_pointer(rect);
    if hovered != view.hovered {
        view.hovered = hovered;
        events.push(if hovered { CarouselEvent::PointerEnter } else { CarouselEvent::PointerLeave });
    }

    let raw_events = ui.input(|i| i.events.clone());
    for event in raw_events {
        match event {
            egui::Event::Touch { id, phase, pos, .. } => match phase {
                TouchPhase::Start if view.touch.is_none() && rect.contains(pos) => {
                    view.touch = Some(id);
                    events.push(CarouselEvent::TouchStart(Point::new(pos.x, pos.y)));
                }
                TouchPhase::Move if view.touch == Some(id) => {
                    events.push(CarouselEvent::TouchMove(Point::new(pos.x, pos.y)));
                }
                TouchPhase::End if view.touch == Some(id) => {
                    view.touch = None;
                    events.push(CarouselEvent::TouchEnd);
                }
                TouchPhase::Cancel if view.touch == Some(id) => {
                    view.touch = None;
                    events.push(CarouselEvent::TouchCancel);
                }
                _ => {}
            },
            egui::Event::PointerButton { pos, button: egui::PointerButton::Primary, pressed, .. } => {
                if view.touch.is_some() {
                    continue;
                }
                if pressed && rect.contains(pos) {
                    view.dragging = true;
                    events.push(CarouselEvent::MouseDown { x: pos.x });
                } else if !pressed && view.dragging {
                    view.dragging = false;
                    events.push(CarouselEvent::MouseUp);
                }
            }
            egui::Event::PointerMoved(pos) if view.dragging && view.touch.is_none() => {
                events.push(CarouselEvent::MouseMove { x: pos.x });
            }
            _ => {}
        }
    }
}
