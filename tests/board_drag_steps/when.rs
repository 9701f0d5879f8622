//! When steps for board drag BDD scenarios.

use super::world::BoardWorld;
use pegboard::drag::domain::{DragEnd, DragItem, DragOver, DragStart};
use rstest_bdd_macros::when;

#[when(r#"column "{active}" is dropped onto column "{target}""#)]
fn drop_column_onto_column(
    world: &mut BoardWorld,
    active: String,
    target: String,
) -> Result<(), eyre::Report> {
    let active_id = world.column_id(&active)?;
    let target_id = world.column_id(&target)?;

    world.engine.handle_drag_start(&DragStart {
        item: DragItem::Column(active_id),
    });
    world.engine.handle_drag_end(&DragEnd {
        active: DragItem::Column(active_id),
        over: Some(DragItem::Column(target_id)),
    });
    Ok(())
}

#[when(r#"card "{active}" is dragged over card "{target}""#)]
fn drag_card_over_card(
    world: &mut BoardWorld,
    active: String,
    target: String,
) -> Result<(), eyre::Report> {
    let active_id = world.card_id(&active)?;
    let target_id = world.card_id(&target)?;

    world.engine.handle_drag_start(&DragStart {
        item: DragItem::Card(active_id),
    });
    world.engine.handle_drag_over(&DragOver {
        active: DragItem::Card(active_id),
        over: Some(DragItem::Card(target_id)),
    });
    world.engine.handle_drag_end(&DragEnd {
        active: DragItem::Card(active_id),
        over: Some(DragItem::Card(target_id)),
    });
    Ok(())
}

#[when(r#"card "{active}" is dragged over the body of column "{title}""#)]
fn drag_card_over_column_body(
    world: &mut BoardWorld,
    active: String,
    title: String,
) -> Result<(), eyre::Report> {
    let active_id = world.card_id(&active)?;
    let column_id = world.column_id(&title)?;

    world.engine.handle_drag_start(&DragStart {
        item: DragItem::Card(active_id),
    });
    world.engine.handle_drag_over(&DragOver {
        active: DragItem::Card(active_id),
        over: Some(DragItem::Column(column_id)),
    });
    world.engine.handle_drag_end(&DragEnd {
        active: DragItem::Card(active_id),
        over: Some(DragItem::Column(column_id)),
    });
    Ok(())
}

#[when(r#"column "{title}" is deleted"#)]
fn delete_column(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.column_id(&title)?;
    world.engine.delete_column(id);
    Ok(())
}

#[when(r#"a card is created in column "{title}""#)]
fn create_card_in_column(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    world.add_card_with_default_content(&title)
}
