use crate::domain::Cell;
use crate::rendering::CellLayout;

/// Pointer buttons in the order the windowing layer reports them
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary = 0,
    Middle = 1,
    /// Held to erase instead of paint
    Secondary = 2,
}

/// Snapshot of the pointer for one tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub held: [bool; 3],
    /// Pixel position, present while any button is held
    pub position: Option<(f32, f32)>,
}

impl PointerState {
    /// Pointer at `position` with the given buttons held
    pub fn pressed(position: (f32, f32), buttons: &[PointerButton]) -> Self {
        let mut held = [false; 3];
        buttons.iter().for_each(|&button| held[button as usize] = true);
        Self {
            held,
            position: Some(position),
        }
    }

    pub fn is_held(&self, button: PointerButton) -> bool {
        self.held[button as usize]
    }

    pub fn any_held(&self) -> bool {
        self.held.iter().any(|&held| held)
    }
}

/// Raw events delivered by the windowing collaborator
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    KeyPress,
    Pointer(PointerState),
    Quit,
}

/// What an event asks the simulation to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    SetCell { x: usize, y: usize, cell: Cell },
    Quit,
}

/// InputController translates raw events into simulation commands.
/// Any key toggles pause; a held pointer paints (or erases with the
/// secondary button) the cell under it on every tick it stays held.
#[derive(Clone, Copy, Debug)]
pub struct InputController {
    layout: CellLayout,
}

impl InputController {
    pub fn new(layout: CellLayout) -> Self {
        Self { layout }
    }

    pub fn interpret(&self, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::KeyPress => Some(Command::TogglePause),
            InputEvent::Quit => Some(Command::Quit),
            InputEvent::Pointer(pointer) => self.pointer_edit(pointer),
        }
    }

    fn pointer_edit(&self, pointer: &PointerState) -> Option<Command> {
        if !pointer.any_held() {
            return None;
        }
        let (px, py) = pointer.position?;
        let (x, y) = self.layout.pixel_to_cell(px, py);

        let cell = if pointer.is_held(PointerButton::Secondary) {
            Cell::Dead
        } else {
            Cell::Alive
        };
        Some(Command::SetCell { x, y, cell })
    }
}
