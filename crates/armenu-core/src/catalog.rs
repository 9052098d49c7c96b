use crate::dish::DishRecord;
use crate::error::MenuError;
use crate::store::{BlobStore, DishRepository};

/// In-memory dish list kept in step with its repository.
///
/// Every mutation persists the full list before returning; on a failed save
/// the in-memory list is rolled back so it never drifts from storage.
pub struct Catalog<S: BlobStore> {
    repo: DishRepository<S>,
    dishes: Vec<DishRecord>,
}

impl<S: BlobStore> Catalog<S> {
    pub fn open(mut repo: DishRepository<S>) -> Result<Self, MenuError> {
        let dishes = repo.load_all()?;
        log::info!("[menu] loaded {} dishes", dishes.len());
        Ok(Self { repo, dishes })
    }

    pub fn dishes(&self) -> &[DishRecord] {
        &self.dishes
    }

    pub fn get(&self, id: &str) -> Option<&DishRecord> {
        self.dishes.iter().find(|d| d.id == id)
    }

    pub fn repository(&self) -> &DishRepository<S> {
        &self.repo
    }

    pub fn add(&mut self, dish: DishRecord) -> Result<(), MenuError> {
        log::info!("[admin] adding dish '{}' ({})", dish.name, dish.id);
        self.dishes.push(dish);
        if let Err(e) = self.repo.save_all(&self.dishes) {
            self.dishes.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Remove the record with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool, MenuError> {
        let Some(idx) = self.dishes.iter().position(|d| d.id == id) else {
            return Ok(false);
        };
        let removed = self.dishes.remove(idx);
        if let Err(e) = self.repo.save_all(&self.dishes) {
            self.dishes.insert(idx, removed);
            return Err(e);
        }
        log::info!("[admin] deleted dish '{}' ({})", removed.name, removed.id);
        Ok(true)
    }
}
