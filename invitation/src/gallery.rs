use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	#[default]
	All,
	Engagement,
	#[serde(rename = "prewedding")]
	PreWedding,
	Couple
}

impl Category {
	pub const ALL: [Self; 4] = [Self::All, Self::Engagement, Self::PreWedding, Self::Couple];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::All => "All Photos",
			Self::Engagement => "Engagement",
			Self::PreWedding => "Pre-wedding",
			Self::Couple => "Couple",
		}
	}

	#[must_use]
	pub fn includes(self, photo: &Photo) -> bool {
		self == Self::All || self == photo.category
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Photo {
	pub id: u32,
	pub src: String,
	pub alt: String,
	pub category: Category
}

/// Photos in the selected category, in the order they were configured
pub fn filtered(photos: &[Photo], category: Category) -> Vec<&Photo> {
	photos.iter().filter(|p| category.includes(p)).collect()
}

/// Which photo (if any) is blown up over the page. Navigation only moves between the photos the
/// current filter lets through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
	open: Option<u32>
}

impl Lightbox {
	#[must_use]
	pub fn current(&self) -> Option<u32> {
		self.open
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.open.is_some()
	}

	/// Returns the photo that's now showing, if there is one with that id
	pub fn open<'p>(&mut self, photos: &'p [Photo], id: u32) -> Option<&'p Photo> {
		let photo = photos.iter().find(|p| p.id == id);
		self.open = photo.map(|p| p.id);
		photo
	}

	pub fn close(&mut self) {
		self.open = None;
	}

	pub fn next(&mut self, photos: &[Photo], category: Category) {
		self.step(photos, category, 1);
	}

	pub fn previous(&mut self, photos: &[Photo], category: Category) {
		self.step(photos, category, -1);
	}

	fn step(&mut self, photos: &[Photo], category: Category, by: isize) {
		let Some(id) = self.open else {
			return;
		};

		let visible = filtered(photos, category);
		if visible.is_empty() {
			self.open = None;
			return;
		}

		// if the filter changed under us and hid the current photo, start from the first one
		let Some(idx) = visible.iter().position(|p| p.id == id) else {
			self.open = Some(visible[0].id);
			return;
		};

		let len = visible.len() as isize;
		let next = (idx as isize + by).rem_euclid(len) as usize;
		self.open = Some(visible[next].id);
	}
}
