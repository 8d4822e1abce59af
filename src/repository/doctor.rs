//! Repository implementation for doctors.

use diesel::prelude::*;

use crate::{
    domain::{
        doctor::{Doctor, DoctorWithSpecialty, NewDoctor, UpdateDoctor},
        types::DoctorId,
    },
    models::doctor::{
        Doctor as DbDoctor, DoctorWithSpecialty as DbDoctorWithSpecialty,
        NewDoctor as DbNewDoctor, UpdateDoctor as DbUpdateDoctor,
    },
    pagination::SortDirection,
    repository::{
        DieselRepository, DoctorReader, DoctorSearchQuery, DoctorWriter, Pagination,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn into_domain(rows: Vec<DbDoctor>) -> RepositoryResult<Vec<Doctor>> {
    rows.into_iter()
        .map(|row| Doctor::try_from(row).map_err(RepositoryError::from))
        .collect()
}

impl DoctorReader for DieselRepository {
    fn get_doctor_by_id(&self, id: DoctorId) -> RepositoryResult<Option<Doctor>> {
        use crate::schema::doctors;

        let mut conn = self.conn()?;
        let db_doctor = doctors::table
            .find(id.get())
            .first::<DbDoctor>(&mut conn)
            .optional()?;

        db_doctor
            .map(|doctor| Doctor::try_from(doctor).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_doctors(&self) -> RepositoryResult<Vec<Doctor>> {
        use crate::schema::doctors;

        let mut conn = self.conn()?;
        let rows = doctors::table
            .order(doctors::id.asc())
            .load::<DbDoctor>(&mut conn)?;

        into_domain(rows)
    }

    fn list_doctors_ordered_by_id(
        &self,
        pagination: Pagination,
        direction: SortDirection,
    ) -> RepositoryResult<Vec<Doctor>> {
        use crate::schema::doctors;

        let mut conn = self.conn()?;
        let mut query = doctors::table.into_boxed();
        query = match direction {
            SortDirection::Asc => query.order(doctors::id.asc()),
            SortDirection::Desc => query.order(doctors::id.desc()),
        };

        let rows = query
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load::<DbDoctor>(&mut conn)?;

        into_domain(rows)
    }

    fn list_doctors_default(&self, pagination: Pagination) -> RepositoryResult<Vec<Doctor>> {
        use crate::schema::doctors;

        let mut conn = self.conn()?;
        let rows = doctors::table
            .order(doctors::id.asc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load::<DbDoctor>(&mut conn)?;

        into_domain(rows)
    }

    fn search_doctors_ordered_by_id(
        &self,
        query: &DoctorSearchQuery,
        direction: SortDirection,
    ) -> RepositoryResult<Vec<Doctor>> {
        use crate::schema::doctors;

        let mut conn = self.conn()?;
        let mut items = doctors::table.into_boxed();

        if let Some(name) = &query.name {
            items = items.filter(doctors::name.like(format!("%{name}%")));
        }
        if let Some(specialty_id) = query.specialty_id {
            items = items.filter(doctors::specialty_id.eq(specialty_id));
        }
        items = match direction {
            SortDirection::Asc => items.order(doctors::id.asc()),
            SortDirection::Desc => items.order(doctors::id.desc()),
        };

        let rows = items
            .limit(query.pagination.limit)
            .offset(query.pagination.offset)
            .load::<DbDoctor>(&mut conn)?;

        into_domain(rows)
    }

    fn get_doctor_with_specialty(
        &self,
        id: DoctorId,
    ) -> RepositoryResult<Option<DoctorWithSpecialty>> {
        use crate::schema::{doctors, specialties};

        let mut conn = self.conn()?;
        let row = doctors::table
            .inner_join(specialties::table)
            .filter(doctors::id.eq(id.get()))
            .select((
                doctors::id,
                doctors::name,
                doctors::specialty_id,
                specialties::name,
            ))
            .first::<DbDoctorWithSpecialty>(&mut conn)
            .optional()?;

        row.map(|row| DoctorWithSpecialty::try_from(row).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_doctors_with_specialty(&self) -> RepositoryResult<Vec<DoctorWithSpecialty>> {
        use crate::schema::{doctors, specialties};

        let mut conn = self.conn()?;
        let rows = doctors::table
            .inner_join(specialties::table)
            .order(doctors::id.asc())
            .select((
                doctors::id,
                doctors::name,
                doctors::specialty_id,
                specialties::name,
            ))
            .load::<DbDoctorWithSpecialty>(&mut conn)?;

        rows.into_iter()
            .map(|row| DoctorWithSpecialty::try_from(row).map_err(RepositoryError::from))
            .collect()
    }
}

impl DoctorWriter for DieselRepository {
    fn create_doctor(&self, new_doctor: &NewDoctor) -> RepositoryResult<Doctor> {
        use crate::schema::doctors;

        let mut conn = self.conn()?;
        let insertable: DbNewDoctor = new_doctor.into();
        let created = diesel::insert_into(doctors::table)
            .values(&insertable)
            .get_result::<DbDoctor>(&mut conn)?;

        Doctor::try_from(created).map_err(RepositoryError::from)
    }

    fn update_doctor(&self, id: DoctorId, updates: &UpdateDoctor) -> RepositoryResult<Doctor> {
        use crate::schema::doctors;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateDoctor = updates.into();
        let updated = diesel::update(doctors::table.find(id.get()))
            .set(&db_updates)
            .get_result::<DbDoctor>(&mut conn)?;

        Doctor::try_from(updated).map_err(RepositoryError::from)
    }

    fn delete_doctor(&self, id: DoctorId) -> RepositoryResult<()> {
        use crate::schema::doctors;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(doctors::table.find(id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
