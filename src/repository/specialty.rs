//! Repository implementation for medical specialties.

use diesel::dsl::exists;
use diesel::prelude::*;

use crate::{
    domain::{
        specialty::{NewSpecialty, Specialty},
        types::SpecialtyId,
    },
    models::specialty::{NewSpecialty as DbNewSpecialty, Specialty as DbSpecialty},
    repository::{
        DieselRepository, SpecialtyReader, SpecialtyWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl SpecialtyReader for DieselRepository {
    fn get_specialty_by_id(&self, id: SpecialtyId) -> RepositoryResult<Option<Specialty>> {
        use crate::schema::specialties;

        let mut conn = self.conn()?;
        let db_specialty = specialties::table
            .find(id.get())
            .first::<DbSpecialty>(&mut conn)
            .optional()?;

        match db_specialty {
            Some(db_specialty) => Ok(Some(
                Specialty::try_from(db_specialty).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_specialties(&self) -> RepositoryResult<Vec<Specialty>> {
        use crate::schema::specialties;

        let mut conn = self.conn()?;
        specialties::table
            .order(specialties::id.asc())
            .load::<DbSpecialty>(&mut conn)?
            .into_iter()
            .map(|specialty| Specialty::try_from(specialty).map_err(RepositoryError::from))
            .collect()
    }

    fn specialty_exists(&self, id: SpecialtyId) -> RepositoryResult<bool> {
        use crate::schema::specialties;

        let mut conn = self.conn()?;
        let found = diesel::select(exists(specialties::table.find(id.get())))
            .get_result::<bool>(&mut conn)?;

        Ok(found)
    }
}

impl SpecialtyWriter for DieselRepository {
    fn create_specialty(&self, new_specialty: &NewSpecialty) -> RepositoryResult<Specialty> {
        use crate::schema::specialties;

        let mut conn = self.conn()?;
        let insertable: DbNewSpecialty = new_specialty.into();
        let created = diesel::insert_into(specialties::table)
            .values(&insertable)
            .get_result::<DbSpecialty>(&mut conn)?;

        Specialty::try_from(created).map_err(RepositoryError::from)
    }

    fn update_specialty(
        &self,
        id: SpecialtyId,
        updates: &NewSpecialty,
    ) -> RepositoryResult<Specialty> {
        use crate::schema::specialties;

        let mut conn = self.conn()?;
        let changes: DbNewSpecialty = updates.into();
        let updated = diesel::update(specialties::table.find(id.get()))
            .set(&changes)
            .get_result::<DbSpecialty>(&mut conn)?;

        Specialty::try_from(updated).map_err(RepositoryError::from)
    }

    fn delete_specialty(&self, id: SpecialtyId) -> RepositoryResult<()> {
        use crate::schema::specialties;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(specialties::table.find(id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
