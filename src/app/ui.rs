mod common;
mod dialogs;
mod icons;
mod points;
mod preview;
mod settings;
mod status;
mod top;
