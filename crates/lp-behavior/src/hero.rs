//! Hero background rotation.

use crate::error::SetupError;
use crate::landing::Landing;
use crate::page::{Page, markers};
use crate::schedule::{Scheduler, TaskKey};

impl<P: Page, S: Scheduler> Landing<P, S> {
    pub(crate) fn setup_hero_rotation(&mut self) -> Result<(), SetupError> {
        if self.els.hero_images.len() > 1 {
            self.scheduler
                .every(TaskKey::HeroRotate, self.config.timings.hero_rotate_ms);
        }
        Ok(())
    }

    pub(crate) fn rotate_hero(&mut self) {
        let images = &self.els.hero_images;
        if images.is_empty() {
            return;
        }
        for image in images {
            self.page.remove_class(image, markers::ACTIVE);
        }
        self.state.hero_index = (self.state.hero_index + 1) % images.len();
        self.page.add_class(&images[self.state.hero_index], markers::ACTIVE);
    }
}
